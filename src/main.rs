use strip_unshredder::compose::compose;
use strip_unshredder::image::RgbImageU8;
use strip_unshredder::types::StripLayout;
use strip_unshredder::{UnshredParams, Unshredder};

fn main() {
    // Demo stub: shreds a synthetic horizontal ramp and puts it back together
    let chunk = 32usize;
    let strips = 6usize;
    let (w, h) = (chunk * strips, 64usize);
    let mut ramp = RgbImageU8::new(w, h);
    for y in 0..h {
        for x in 0..w {
            let v = x as u8;
            ramp.set(x, y, [v, v / 2, 255 - v]);
        }
    }

    let layout = match StripLayout::new(w, h, chunk) {
        Ok(layout) => layout,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };
    let shuffled = [3usize, 0, 5, 1, 4, 2];
    let result = compose(&ramp, &layout, &shuffled).and_then(|shredded| {
        Unshredder::new(UnshredParams::default().with_chunk_size(chunk))
            .resolve_order(&shredded)
    });
    match result {
        Ok(chain) => {
            let recovered: Vec<usize> = chain.order.iter().map(|&s| shuffled[s]).collect();
            println!("shuffled={:?} recovered={:?}", shuffled, recovered);
        }
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
