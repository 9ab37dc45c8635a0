use pinkie::error::ColorFormatError;
use pinkie::Rgba;

fn main() -> Result<(), ColorFormatError> {
    let color: Rgba = "44c71a".parse()?;

    println!("RGBA: {}", color);
    println!("HSLA: {}", color.to_hsla());
    println!("CMYK: {}", color.to_cmyk());
    println!("Web:  {}", color.to_web());

    Ok(())
}
