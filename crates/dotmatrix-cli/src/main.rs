use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use dotmatrix::{
    available_fonts, fonts::font_by_name, parse_default, Align, CoordinateOptions, Font,
    RenderOptions,
};
use std::fs;

use crate::console::{render_blocks, render_coordinates};
mod console;

#[derive(Parser)]
#[command(name = "dotmatrix", about = "Dot-matrix bitmap font renderer")]
struct Cli {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Args)]
struct Layout {
    /// Built-in font name
    #[arg(short, long, default_value = "fiftydots")]
    font: String,
    /// Substitute for characters the font does not define
    #[arg(long, default_value = " ", value_parser = parse_default)]
    default: char,
    /// Blank columns between characters
    #[arg(long, default_value = "1")]
    intra: usize,
    #[arg(short, long)]
    proportional: bool,
    /// Blanks take one column instead of two in proportional layout
    #[arg(long)]
    narrow: bool,
    /// Pad or crop to this many columns
    #[arg(short, long)]
    width: Option<usize>,
    /// center, left or right (first letter is enough)
    #[arg(short, long, default_value = "center")]
    align: Align,
}

impl Layout {
    fn font(&self) -> Result<&'static Font> {
        font_by_name(&self.font).with_context(|| format!("unknown font {:?}", self.font))
    }

    fn options(&self) -> RenderOptions {
        RenderOptions {
            default: self.default,
            intra: self.intra,
            proportional: self.proportional,
            narrow: self.narrow,
            width: self.width,
            align: self.align,
        }
    }
}

#[derive(Subcommand)]
enum Cmd {
    /// Render text as a framed dot pattern
    Render {
        text: String,
        #[command(flatten)]
        layout: Layout,
        #[arg(long, default_value = "<")]
        left_border: String,
        #[arg(long, default_value = ">")]
        right_border: String,
        /// Draw with half-block characters instead of '*'
        #[arg(long)]
        blocks: bool,
    },
    /// Print the coordinates of the dots of the rendered text
    Coords {
        text: String,
        #[command(flatten)]
        layout: Layout,
        /// List unset dots instead of set ones
        #[arg(long)]
        unset: bool,
        #[arg(long)]
        x_first: bool,
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        x_offset: i64,
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        y_offset: i64,
    },
    /// Print the width in dots of the text
    Measure {
        text: String,
        #[command(flatten)]
        layout: Layout,
    },
    /// List the built-in fonts
    Fonts,
    /// Check a glyph table file for rows of the wrong size
    Check {
        file: String,
        #[arg(long)]
        height: usize,
        #[arg(long)]
        width: usize,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Cmd::Render {
            text,
            layout,
            left_border,
            right_border,
            blocks,
        } => {
            let font = layout.font()?;
            let options = layout.options();
            log::debug!("rendering {text:?} with {} {options:?}", font.name());
            let out = if blocks {
                render_blocks(&font.grid(&text, &options)?)
            } else {
                font.grid_to_str(&text, &left_border, &right_border, &options)?
            };
            println!("{out}");
        }
        Cmd::Coords {
            text,
            layout,
            unset,
            x_first,
            x_offset,
            y_offset,
        } => {
            let projection = CoordinateOptions {
                value: !unset,
                x_first,
                x_offset,
                y_offset,
            };
            let coords = layout
                .font()?
                .coordinates(&text, &layout.options(), &projection)?;
            println!("{}", render_coordinates(&coords));
        }
        Cmd::Measure { text, layout } => {
            let width = layout.font()?.number_of_pixels(&text, &layout.options())?;
            println!("{width}");
        }
        Cmd::Fonts => {
            for font in available_fonts() {
                println!(
                    "{}: {}x{} dots, {} glyphs",
                    font.name(),
                    font.height(),
                    font.width(),
                    font.glyph_count()
                );
            }
        }
        Cmd::Check {
            file,
            height,
            width,
        } => {
            let table = fs::read_to_string(&file).with_context(|| format!("reading {file}"))?;
            let builder = Font::builder(file.as_str(), height, width).dots(&table)?;
            let issues = builder.check();
            for issue in &issues {
                println!("{issue}");
            }
            if !issues.is_empty() {
                bail!("{file}: {} malformed glyphs", issues.len());
            }
            let font = builder.build()?;
            println!("{file}: {} glyphs ok", font.glyph_count());
        }
    }
    Ok(())
}
