// UI layer: numbered console menus driving one annotation round trip.
// The functions are small and synchronous to keep the flow easy to follow.

use std::time::Duration;

use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};

use crate::api::VisionClient;
use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::feature::{self, Feature};
use crate::images::{self, ImagePayload};
use crate::vision;

/// Run one select-analyze-print round trip against `config`. Blocks on
/// two console reads and one network call, then prints the result.
pub fn run(config: &AppConfig) -> Result<()> {
    println!(
        "Put the images you want to analyze inside: {}",
        config.images_dir.display()
    );

    let image = select_image(config)?;
    let feature = select_feature()?;

    let auth_spinner = spinner("Authenticating...");
    let connected = VisionClient::connect(config);
    auth_spinner.finish_and_clear();
    let client = connected?;

    let analyze_spinner = spinner("Analyzing...");
    let annotated = client.annotate(image, feature);
    analyze_spinner.finish_and_clear();
    let response = annotated?;

    println!("{}", vision::format_response(feature.kind, &response));
    Ok(())
}

/// Show the numbered file menu and read the chosen image.
fn select_image(config: &AppConfig) -> Result<ImagePayload> {
    let files = images::list_images(&config.images_dir)?;

    println!("\nSelect the image you want to analyze: ");
    for (index, path) in files.iter().enumerate() {
        let name = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("(unnamed)");
        println!("[{}] {}", index + 1, name);
    }

    let raw: String = Input::new().with_prompt("Image number").interact_text()?;
    let index = parse_selection(&raw, files.len())?;
    ImagePayload::from_file(&files[index])
}

/// Show the feature menu and read the chosen feature. The menu stops at
/// 7; the unspecified kind stays reachable only through
/// `Feature::from_code` directly.
fn select_feature() -> Result<Feature> {
    println!("\nSelect the feature you want to run: ");
    for (code, label) in feature::MENU {
        println!("[{}] {}", code, label);
    }

    let raw: String = Input::new().with_prompt("Feature number").interact_text()?;
    let index = parse_selection(&raw, feature::MENU.len())?;
    Feature::from_code(feature::MENU[index].0)
}

/// Parse a 1-based menu choice, enforcing the range before anything else
/// runs. Returns the 0-based index.
pub fn parse_selection(input: &str, count: usize) -> Result<usize> {
    let trimmed = input.trim();
    let choice: usize = trimmed.parse().map_err(|_| Error::Input {
        message: format!("expected a number, got {:?}", trimmed),
    })?;
    if choice < 1 || choice > count {
        return Err(Error::Input {
            message: format!("selection {} is out of range 1-{}", choice, count),
        });
    }
    Ok(choice - 1)
}

fn spinner(message: &'static str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    bar.set_message(message);
    bar.enable_steady_tick(Duration::from_millis(80));
    bar
}
