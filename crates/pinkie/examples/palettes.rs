use pinkie::error::ColorError;
use pinkie::{Palette, Rgba};

fn main() -> Result<(), ColorError> {
    // Basic palette management
    let mut palette = Palette::with_colors(&["ffffff".parse::<Rgba>()?, "4c66a1".parse()?], 8)?;
    palette.add("16c235".parse()?)?;
    palette.remove(&"ffffff".parse()?);
    println!("Palette with {} colors", palette.len());

    // Palette generators
    println!("Web palette with {} colors", Palette::web().len());
    let random = Palette::random(7, 8)?;
    let hex: Vec<_> = random.iter().map(Rgba::to_hex).collect();
    println!("Random palette: {}", hex.join(" "));

    // Gradient palette
    let start: Rgba = "ff0000".parse()?;
    let end: Rgba = "0000ff".parse()?;
    let gradient = Palette::gradient(&start, &end, 5)?;

    println!("Gradient from {} to {}:", start.to_hex(), end.to_hex());
    for color in &gradient {
        println!("{}", color.to_hex());
    }

    Ok(())
}
