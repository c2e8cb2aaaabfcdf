use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use color_harmony::{generate_harmony, generate_pattern, generate_random_palette,
                    Color, HarmonyKind, PatternGrid};

type Err = Box<dyn Error>;

fn table_of_colors(fh: &mut impl Write, colors: &[Color],
                   width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 30px; \
                      background-color: {c}; color: {}\">{c}</td>",
                 c.contrast_text())?;
    }
    writeln!(fh, "<td rowspan=\"2\" style=\"padding-left: 7px\">\
                  {comment}</td></tr><tr>")?;
    for c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 12px; \
                      background-color: {}\"></td>",
                 c.to_gray())?;
    }
    writeln!(fh, "</tr></table><br/>")?;
    Ok(())
}

fn pattern(fh: &mut impl Write, p: &PatternGrid, module: u32,
           comment: &str) -> Result<(), Err> {
    writeln!(fh, "<p>{comment}</p>\n\
                  <table style=\"border: 0px;  border-spacing: 0px\">")?;
    for row in p.modules() {
        write!(fh, "<tr>")?;
        for dark in row {
            let c = if dark { "#000000" } else { "#ffffff" };
            write!(fh, "<td style=\"width: {module}px; height: {module}px; \
                        padding: 0px; background-color: {c}\"></td>")?;
        }
        writeln!(fh, "</tr>")?;
    }
    writeln!(fh, "</table><br/>")?;
    Ok(())
}

fn main() -> Result<(), Err> {
    let mut args = env::args();
    let prog = args.next().unwrap_or_default();
    let base = args.next().unwrap_or_else(|| "#3498db".to_string());
    let text = args.next().unwrap_or_else(|| "Hello World!".to_string());

    let mut fh = BufWriter::new(File::create("swatches.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>color-harmony: {prog}</title>\n\
                  </head>\n\
                  <body>")?;
    writeln!(fh, "<h3>Harmonies of {base}</h3>")?;
    for kind in HarmonyKind::ALL {
        table_of_colors(&mut fh, &generate_harmony(&base, kind), 90,
                        kind.title())?;
    }

    writeln!(fh, "<h3>Random</h3>")?;
    for _ in 0 .. 3 {
        table_of_colors(&mut fh, &generate_random_palette(), 90, "")?;
    }

    writeln!(fh, "<h3>Pattern</h3>")?;
    pattern(&mut fh, &generate_pattern(&text), 8, &text)?;

    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
