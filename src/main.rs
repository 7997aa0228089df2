use depth_structure::image::{DepthImage, Plane};
use depth_structure::{FrameEvent, RawImage, VisionSession};
use std::sync::mpsc;

fn main() {
    env_logger::init();

    // Demo stub: a 640x480 scene at 1.5 m with a box at 0.9 m and a few
    // dropouts, delivered as raw messages like a camera driver would.
    let (w, h) = (640usize, 480usize);
    let mut depth: DepthImage = Plane::filled(w, h, 1500);
    for y in 160..320 {
        for x in 240..400 {
            depth.set(x, y, 900);
        }
    }
    for i in 0..50 {
        depth.set((i * 13) % w, (i * 7) % h, 0);
    }
    let color = Plane::filled(w, h, [90u8, 120, 150]);

    let (tx, rx) = mpsc::channel::<FrameEvent>();
    let mut session = VisionSession::default();
    session.register_observer(Box::new(tx));

    let latched = session.on_color_frame(&RawImage::from_color(&color));
    let repeated = session.on_color_frame(&RawImage::from_color(&color));
    let processed = session.on_depth_frame(&RawImage::from_depth(&depth));

    let events: Vec<FrameEvent> = rx.try_iter().collect();
    println!("color latched={latched} second={repeated} events={events:?}");
    match session.latest() {
        Some(out) if processed => {
            let peak = out.mask.data.iter().copied().max().unwrap_or(0);
            println!(
                "depth range=({}, {}) mask={}x{} peak={}",
                out.range.min_depth, out.range.max_depth, out.mask.w, out.mask.h, peak
            );
        }
        _ => println!("depth frame produced no output"),
    }
}
