use strip_unshredder::compose::compose;
use strip_unshredder::image::RgbImageU8;
use strip_unshredder::types::StripLayout;

/// Grey horizontal ramp: column `x` has level `step * x`, plus a small
/// per-row ripple so rows are not identical.
pub fn ramp_rgb(width: usize, height: usize, step: usize) -> RgbImageU8 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(step * (width - 1) + 3 <= 255, "ramp overflows 8 bits");

    let mut img = RgbImageU8::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let v = (step * x + y % 4) as u8;
            img.set(x, y, [v, v, v]);
        }
    }
    img
}

/// Place source strip `order[p]` at slot `p`.
pub fn shred(img: &RgbImageU8, chunk: usize, order: &[usize]) -> RgbImageU8 {
    let layout = StripLayout::new(img.width(), img.height(), chunk).expect("valid layout");
    compose(img, &layout, order).expect("valid shred order")
}

/// Every ordering of `0..n`, in lexicographic order.
pub fn permutations(n: usize) -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    let mut current = Vec::with_capacity(n);
    let mut used = vec![false; n];
    extend_permutations(&mut current, &mut used, &mut out);
    out
}

fn extend_permutations(current: &mut Vec<usize>, used: &mut [bool], out: &mut Vec<Vec<usize>>) {
    if current.len() == used.len() {
        out.push(current.clone());
        return;
    }
    for i in 0..used.len() {
        if used[i] {
            continue;
        }
        used[i] = true;
        current.push(i);
        extend_permutations(current, used, out);
        current.pop();
        used[i] = false;
    }
}
