//! Button CLI - Resolve, render and list Button configurations.
//!
//! This binary prints JSON wrapped in an `ApiResponse`.

use button_core::{
    button_arg_types, get_story, list_stories, story_ids, ApiResponse, Button, ButtonProps,
    Size, Variant,
};
use clap::{Args, Parser, Subcommand};
use serde_json::json;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "button")]
#[command(about = "Button CLI - resolve render state, classes and markup")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve state, classes and slots
    Resolve(ButtonArgs),
    /// Render button markup
    Render {
        #[command(flatten)]
        button: ButtonArgs,
        /// Button label (plain text)
        #[arg(short, long, default_value = "Button")]
        label: String,
    },
    /// Story commands
    Stories {
        #[command(subcommand)]
        action: StoriesAction,
    },
    /// List the controls for every Button arg
    Controls,
}

#[derive(Args)]
struct ButtonArgs {
    /// Variant: primary, secondary or tertiary
    #[arg(short, long, default_value = "primary")]
    variant: Variant,
    /// Size: sm, md or lg
    #[arg(short, long, default_value = "md")]
    size: Size,
    /// Disable the button
    #[arg(long)]
    disabled: bool,
    /// Show the loading spinner
    #[arg(long)]
    loading: bool,
    /// Render the hover look statically
    #[arg(long)]
    hover: bool,
    /// Left icon markup
    #[arg(long)]
    left_icon: Option<String>,
    /// Right icon markup
    #[arg(long)]
    right_icon: Option<String>,
    /// Extra classes, appended last
    #[arg(short, long, default_value = "")]
    class: String,
}

impl ButtonArgs {
    fn into_button(self, label: &str) -> Button {
        let props = ButtonProps::new()
            .variant(self.variant)
            .size(self.size)
            .disabled(self.disabled)
            .loading(self.loading)
            .show_as_hover(self.hover);

        let mut button = Button::with_label(label)
            .props(props)
            .class_name(self.class);
        if let Some(icon) = self.left_icon {
            button = button.left_icon(icon);
        }
        if let Some(icon) = self.right_icon {
            button = button.right_icon(icon);
        }
        button
    }
}

#[derive(Subcommand)]
enum StoriesAction {
    /// List available stories
    List,
    /// Get story details
    Get {
        /// Story ID
        #[arg(short, long)]
        id: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let output = match cli.command {
        Commands::Resolve(args) => handle_resolve(args),
        Commands::Render { button, label } => handle_render(button, &label),
        Commands::Stories { action } => handle_stories(action),
        Commands::Controls => ApiResponse::ok(json!({ "controls": button_arg_types() })),
    };

    match output.to_json_pretty() {
        Ok(text) => {
            println!("{}", text);
            if output.ok {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn handle_resolve(args: ButtonArgs) -> ApiResponse<serde_json::Value> {
    let button = args.into_button("");
    let resolution = button.resolution();
    let class_list = resolution.class_list(&button.class_name);

    ApiResponse::ok(json!({
        "resolution": resolution,
        "class_list": class_list,
        "left_slot_classes": resolution.left_slot_classes(),
        "right_slot_classes": resolution.right_slot_classes(),
    }))
}

fn handle_render(args: ButtonArgs, label: &str) -> ApiResponse<serde_json::Value> {
    let button = args.into_button(label);
    ApiResponse::ok(json!({
        "html": button.to_html(),
        "disabled": button.resolution().is_native_disabled,
    }))
}

fn handle_stories(action: StoriesAction) -> ApiResponse<serde_json::Value> {
    match action {
        StoriesAction::List => ApiResponse::ok(json!({ "stories": list_stories() })),
        StoriesAction::Get { id } => match get_story(&id) {
            Some(story) => ApiResponse::ok(json!({
                "story": story,
                "resolution": story.resolution(),
                "html": story.to_html(),
            })),
            None => ApiResponse::err(
                button_core::Error::UnknownStory(format!(
                    "{}. Available: {}",
                    id,
                    story_ids().join(", ")
                ))
                .to_string(),
            ),
        },
    }
}
