// Example: an infinite carousel keeps its content in view while slides are added.
use rcarousel::{Carousel, CarouselOptions, CursorSource, Size, WrapMode};

fn main() {
    let opts = CarouselOptions::new()
        .with_wrap(WrapMode::Infinite)
        .with_initial_size(Some(Size::new(800.0, 200.0)))
        .with_on_cursor_change(Some(|cursor, reason| {
            println!("on_cursor_change: cursor={cursor} reason={reason:?}");
        }));
    let mut c = Carousel::new(opts, CursorSource::Internal(100), 3).expect("valid options");
    println!("cursor={} local={}", c.cursor(), c.local_cursor());

    for count in [4, 6, 3] {
        c.set_slides_count(count).expect("valid cursor");
        println!(
            "count={count} cursor={} local={}",
            c.cursor(),
            c.local_cursor()
        );
    }

    let step = c.move_by(1).expect("valid cursor");
    println!("move_by(1) -> {step:?}, cursor={}", c.cursor());
}
