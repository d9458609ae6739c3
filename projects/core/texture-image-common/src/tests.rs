use crate::color_8888::Color8888;

#[test]
fn bgra_bytes_are_reordered() {
    let pixel = Color8888::from_bgra([10, 20, 30, 40]);
    assert_eq!(pixel, Color8888::new(30, 20, 10, 40));
}

#[test]
fn unorm_conversion_covers_full_range() {
    assert_eq!(Color8888::new(0, 0, 0, 0).to_unorm_f32(), [0.0; 4]);
    assert_eq!(Color8888::new(255, 255, 255, 255).to_unorm_f32(), [1.0; 4]);
}
