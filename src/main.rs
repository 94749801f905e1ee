use clap::{Parser, ValueEnum};
use fb_generic_template::{
    Attachment, BuilderError, Button, GenericTemplateBuilder, Message, Template,
};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "carousel")]
#[command(about = "Build Messenger generic template payloads from a JSON list of bubbles")]
#[command(version)]
struct Cli {
    /// JSON file with an array of bubbles, or '-' for stdin
    input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    output: OutputFormat,

    /// Print the JSON payload on a single line
    #[arg(long)]
    compact: bool,

    /// Log builder steps to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Payload JSON
    Json,
    /// Human-readable summary
    Text,
}

#[derive(Deserialize)]
struct BubbleInput {
    title: String,
    subtitle: Option<String>,
    item_url: Option<String>,
    image_url: Option<String>,
    #[serde(default)]
    buttons: Vec<ButtonInput>,
}

#[derive(Deserialize)]
struct ButtonInput {
    title: String,
    #[serde(default)]
    value: Value,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let raw = match read_input(&cli.input) {
        Ok(raw) => raw,
        Err(e) => fail(cli.output, format!("Error reading input: {}", e)),
    };

    let bubbles: Vec<BubbleInput> = match serde_json::from_str(&raw) {
        Ok(bubbles) => bubbles,
        Err(e) => fail(cli.output, format!("Error parsing input JSON: {}", e)),
    };

    let message = match build(&bubbles) {
        Ok(message) => message,
        Err(e) => fail(cli.output, format!("Error building template: {}", e)),
    };

    match cli.output {
        OutputFormat::Json => {
            let json = if cli.compact {
                serde_json::to_string(&message)
            } else {
                serde_json::to_string_pretty(&message)
            };
            match json {
                Ok(json) => println!("{}", json),
                Err(e) => fail(cli.output, format!("Error serializing payload: {}", e)),
            }
        }
        OutputFormat::Text => print_summary(&message),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_input(path: &Path) -> io::Result<String> {
    if path.as_os_str() == "-" {
        let mut raw = String::new();
        io::stdin().read_to_string(&mut raw)?;
        Ok(raw)
    } else {
        fs::read_to_string(path)
    }
}

fn build(bubbles: &[BubbleInput]) -> Result<Message, BuilderError> {
    let mut builder = GenericTemplateBuilder::new();
    for bubble in bubbles {
        builder.add_bubble(&bubble.title, bubble.subtitle.as_deref())?;
        if let Some(url) = &bubble.item_url {
            builder.add_url(url)?;
        }
        if let Some(url) = &bubble.image_url {
            builder.add_image(url)?;
        }
        for button in &bubble.buttons {
            builder.add_button(&button.title, button.value.clone())?;
        }
    }
    builder.get()
}

fn print_summary(message: &Message) {
    let Attachment::Template(Template::Generic { elements }) = &message.attachment;
    println!("Generic template with {} bubble(s):", elements.len());
    for (i, bubble) in elements.iter().enumerate() {
        println!("  {}. {}", i + 1, bubble.title);
        if let Some(subtitle) = &bubble.subtitle {
            println!("     Subtitle: {}", subtitle);
        }
        if let Some(url) = &bubble.item_url {
            println!("     URL: {}", url);
        }
        if let Some(url) = &bubble.image_url {
            println!("     Image: {}", url);
        }
        for button in &bubble.buttons {
            match button {
                Button::WebUrl { title, url } => println!("     Link: {} -> {}", title, url),
                Button::Postback { title, payload } => {
                    println!("     Postback: {} -> {}", title, payload)
                }
            }
        }
    }
}

fn fail(output: OutputFormat, error: String) -> ! {
    match output {
        OutputFormat::Json => {
            let body = serde_json::json!({ "status": "error", "error": error });
            println!("{}", body);
        }
        OutputFormat::Text => eprintln!("{}", error),
    }
    process::exit(1);
}
