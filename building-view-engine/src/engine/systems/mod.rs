pub mod frame_stats;
