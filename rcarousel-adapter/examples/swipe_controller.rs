// Example: feed drag frames into a controller and print slot positions per frame.
use rcarousel::{CarouselOptions, Size, UnitValue, WrapMode};
use rcarousel_adapter::{Controller, DragUpdate, Easing};

fn main() {
    let opts = CarouselOptions::new()
        .with_wrap(WrapMode::Loop)
        .with_max_item_size(UnitValue::parse("100%"))
        .with_swipe_threshold(UnitValue::parse("30px"))
        .with_initial_size(Some(Size::new(1000.0, 300.0)));
    let mut c = Controller::new(opts, 5, 0)
        .expect("valid options")
        .with_animation(120, Easing::EaseInOutCubic);

    // Pointer moves from x = 1000 to x = 960, then releases.
    let frames = [(-10.0, true), (-25.0, true), (-40.0, false)];
    let mut now_ms = 0;
    for (dx, down) in frames {
        let update = c.on_drag([dx, 0.0], down, now_ms).expect("valid cursor");
        println!("t={now_ms} dx={dx} down={down} -> {update:?}");
        if let DragUpdate::Commit(step) = update {
            println!("  committed {step}, cursor={}", c.cursor().global_cursor());
        }
        now_ms += 16;
    }

    while c.tick(now_ms) {
        let mut line = String::new();
        c.for_each_slot(now_ms, |view, px| {
            line.push_str(&format!(" [{}:{:?} {:>8.1}]", view.slot, view.slide, px));
        });
        println!("t={now_ms}{line}");
        now_ms += 16;
    }

    c.go_to(3, now_ms).expect("valid cursor");
    println!(
        "go_to(3): cursor={} local={}",
        c.cursor().global_cursor(),
        c.cursor().local_cursor()
    );
}
