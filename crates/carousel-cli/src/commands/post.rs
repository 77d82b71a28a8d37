//! Post command: the caption that accompanies a carousel

use std::fs;

use anyhow::{Context, Result};

use crate::cli::{PostArgs, Tone};

const CALL_TO_ACTION: &str = "👉 En savoir plus :";

pub fn opener(tone: Tone) -> &'static str {
    match tone {
        Tone::Pro => "Incube ton projet, plus vite et mieux.",
        Tone::Friendly => "Tu as une idée ? On t’aide à la transformer en projet.",
        Tone::Punchy => "Passe à l’action. Lance ton projet.",
    }
}

/// Non-blank lines, stripped of list markers and surrounding blanks
pub fn key_points(points: &str) -> Vec<&str> {
    points
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.trim_matches([' ', '-', '•', '\t']))
        .collect()
}

/// Opener, blank line, bullet points, blank line, link
pub fn compose_post(tone: Tone, points: &str, url: &str) -> String {
    let mut lines = vec![opener(tone).to_string(), String::new()];
    lines.extend(key_points(points).into_iter().map(|point| format!("• {point}")));
    lines.push(String::new());
    lines.push(format!("{CALL_TO_ACTION} {url}"));
    lines.join("\n")
}

pub fn run(args: &PostArgs) -> Result<()> {
    log::debug!("Post for {} ({:?}), goal: {}", args.platform.as_str(), args.tone, args.goal);
    let post = compose_post(args.tone, &args.points, &args.url);

    match &args.output_dir {
        Some(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
            let path = dir.join(format!("post_{}.txt", args.platform.as_str()));
            fs::write(&path, post.as_bytes())
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("✓ Post written to {}", path.display());
        },
        None => println!("{post}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_layout() {
        let post = compose_post(Tone::Pro, "Experts IA 24/7\n- Diagnostic gratuit", "https://iacubateur.com");
        assert_eq!(
            post,
            "Incube ton projet, plus vite et mieux.\n\n\
             • Experts IA 24/7\n\
             • Diagnostic gratuit\n\n\
             👉 En savoir plus : https://iacubateur.com"
        );
    }

    #[test]
    fn test_points_lose_markers_and_blank_lines() {
        assert_eq!(
            key_points("  • Communauté\n\n\t- Programme -\n   "),
            ["Communauté", "Programme"]
        );
    }

    #[test]
    fn test_openers_follow_tone() {
        assert!(compose_post(Tone::Friendly, "", "x").starts_with("Tu as une idée ?"));
        assert!(compose_post(Tone::Punchy, "", "x").starts_with("Passe à l’action."));
        // No points still keeps both blank separator lines
        assert_eq!(compose_post(Tone::Pro, "", "u").lines().count(), 4);
    }
}
