use carousel::{Breakpoint, BreakpointTable};
use carousel_adapter::{Controller, ControllerOptions};

fn main() {
    // Example: a rotating hero banner driven by a host frame loop.
    //
    // An adapter would:
    // - forward resize/pointer/hover events to the controller
    // - call tick(now_ms) from a frame loop or timer
    // - render using controller.geometry() (or live_geometry() while dragging)
    let table = BreakpointTable::new([Breakpoint::new(720, 1)], 1).expect("valid table");
    let options = ControllerOptions::new(table).with_autoplay_interval_ms(Some(4000));
    let mut c = Controller::new(4, 1280.0, options, 0).expect("valid options");

    let mut now_ms = 0u64;
    while now_ms < 20_000 {
        now_ms += 16;
        if c.tick(now_ms) {
            println!(
                "t={now_ms} offset={} geometry={:?}",
                c.engine().offset(),
                c.geometry()
            );
        }
        if now_ms == 9_008 {
            // User hovers the hero for two seconds.
            c.on_hover(true, now_ms);
        }
        if now_ms == 11_008 {
            c.on_hover(false, now_ms);
        }
    }

    // Swipe to the previous slide.
    c.on_pointer_down(600.0);
    c.on_pointer_move(700.0);
    println!("dragging: translate={}", c.live_geometry(1280.0).translate);
    let moved = c.on_pointer_up(720.0, 1280.0, now_ms).expect("valid drag");
    println!("swipe moved={moved} offset={}", c.engine().offset());
}
