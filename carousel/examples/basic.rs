use carousel::{Breakpoint, BreakpointTable, CarouselEngine};

fn main() {
    let table = BreakpointTable::new([Breakpoint::new(720, 1), Breakpoint::new(1100, 2)], 4)
        .expect("valid breakpoint table");

    let mut c = CarouselEngine::with_breakpoints(5, &table, 1400.0);
    println!("visible_count={} max_offset={}", c.visible_count(), c.max_offset());

    c.step_forward();
    println!("offset={} geometry={:?}", c.offset(), c.geometry());

    // Viewport shrinks: re-resolve and re-clamp.
    c.apply_breakpoints(&table, 900.0);
    println!(
        "after resize: visible_count={} offset={} range={:?}",
        c.visible_count(),
        c.offset(),
        c.visible_range()
    );

    // Tab switch to a smaller dataset.
    c.set_item_count(2);
    println!(
        "after dataset swap: offset={} at_start={} at_end={}",
        c.offset(),
        c.at_start(),
        c.at_end()
    );
}
