use pinkie::error::ColorError;
use pinkie::Rgba;

fn show(label: &str, colors: &[Rgba]) {
    let hex: Vec<_> = colors.iter().map(|c| format!("#{}", c.to_hex())).collect();
    println!("{:<20} {}", label, hex.join(" "));
}

fn main() -> Result<(), ColorError> {
    let color: Rgba = "ff526c".parse()?;

    // Color schemes
    show("Complementary:", &[color.complementary()]);
    show("Split complementary:", &color.split_complementary(None));
    show("Triadic:", &color.triadic());
    show("Tetradic:", &color.tetradic());
    show("Analogous:", &color.analogous(None));

    // Nearest and furthest
    let candidates: [Rgba; 2] = ["4fc10a".parse()?, "bb57a2".parse()?];
    show("Closest:", &[color.closest(&candidates)?]);
    show("Furthest:", &[color.furthest(&candidates)?]);

    Ok(())
}
