use pinkie::error::ColorError;
use pinkie::{BlendMode, Rgba};

fn main() -> Result<(), ColorError> {
    let background: Rgba = "55f6a380".parse()?;
    let foreground: Rgba = "ffb15780".parse()?;

    for mode in BlendMode::all() {
        let color = background.blend(&foreground, mode)?;
        println!("{:<12} #{}", mode, color.to_hex_alpha());
    }

    Ok(())
}
