mod bridge;
mod constants;
mod engine;

use bridge_protocol::channel::BridgeChannel;

use crate::engine::core::app_setup::create_app;

fn main() {
    let (engine_end, shell_end) = BridgeChannel::pair();
    let mut app = create_app(engine_end);

    #[cfg(not(target_arch = "wasm32"))]
    {
        // The shell normally lives in the host application; for native
        // runs a demo shell loop takes its place on its own thread.
        std::thread::spawn(move || run_demo_shell(shell_end));
        app.run();
    }

    #[cfg(target_arch = "wasm32")]
    {
        // Embedded in a page the peer endpoint belongs to the postMessage
        // plumbing, wired up by the bridge's startup system.
        let _ = shell_end;
        wasm_bindgen_futures::spawn_local(async move {
            app.run();
        });
    }
}

/// Stand-in shell: request the schedule once, then keep the mirror fresh
/// and log what it sees. Ticked by its own loop, never by the engine's.
#[cfg(not(target_arch = "wasm32"))]
fn run_demo_shell(endpoint: bridge_protocol::channel::BridgeEndpoint) {
    use building_shell::ShellBridge;

    let mut shell = ShellBridge::new(endpoint);
    shell.request_events();

    loop {
        if shell.pump() > 0 {
            let mirror = shell.mirror();
            bevy::log::info!(
                "schedule mirror: {} events across {} rooms",
                mirror.flattened().len(),
                mirror.rooms().len()
            );
        }
        std::thread::sleep(std::time::Duration::from_millis(100));
    }
}
