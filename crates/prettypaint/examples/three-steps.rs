use prettypaint::colour::Colour;
use prettypaint::paint::Spans;
use prettypaint::style::Style;

fn main() {
    // 1. Assemble your styles
    let chic = Style::default()
        .bold()
        .underline()
        .fg(Colour::rgb(215, 40, 39));
    let whisper = Style::default().dim().italic();

    // 2. Apply your styles
    println!("\n    {}\n", chic.paint("Wow!"));

    // 3. Switch between styles
    let spans = [
        whisper.paint("psst, "),
        whisper.bold().paint("listen: "),
        chic.paint("Wow!"),
    ];
    println!("    {}\n", Spans(&spans));
}
