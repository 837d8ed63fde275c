// Example: a bounded carousel driven by an external cursor.
use rcarousel::{Carousel, CarouselOptions, CursorSource, Size, UnitValue};

fn main() {
    let opts = CarouselOptions::new()
        .with_max_item_size(UnitValue::parse("300px"))
        .with_initial_size(Some(Size::new(1000.0, 240.0)));
    let mut c = Carousel::new(opts, CursorSource::External(0), 12).expect("valid options");

    println!("visible={} layout={:?}", c.visible_count(), c.layout());
    println!("range={:?}", c.range());

    for cursor in [1, 2, 9, 11] {
        c.set_cursor(cursor).expect("valid cursor");
        println!("cursor={} relocation={:?}", c.cursor(), c.pool().last_relocation());
        c.for_each_slot(|s| {
            println!(
                "  slot={} global={} slide={:?} d={} immediate={}",
                s.slot, s.global_index, s.slide, s.anim.d, s.anim.immediate
            );
        });
    }
}
