//! Info command implementation
//!
//! Lists background styles and canvas presets.

use anyhow::Result;
use carousel::{Preset, StyleTag};

use crate::cli::InfoArgs;

pub fn run(args: &InfoArgs) -> Result<()> {
    // If no specific flags, show all info
    let show_all = !args.styles && !args.presets;

    println!("Carousel v{}", env!("CARGO_PKG_VERSION"));
    println!();

    if show_all || args.styles {
        println!("Background styles:");
        for style in StyleTag::ALL {
            println!("  {:<18} - {}", style.as_str(), style.display_name());
        }
        if show_all {
            println!();
        }
    }

    if show_all || args.presets {
        println!("Canvas presets:");
        for preset in Preset::ALL {
            let pdf = if preset.is_linkedin() { " [PDF by default]" } else { "" };
            println!("  {:<18} - {}{}", preset.as_str(), preset.display_name(), pdf);
        }
    }

    Ok(())
}
