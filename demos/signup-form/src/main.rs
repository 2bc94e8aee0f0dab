//! Sign-up form demo
//!
//! Serves a four-field sign-up form at `/` and drives it with in-process
//! requests.
//!
//! ## Usage
//!
//! ```bash
//! signup-form                      # scripted walk-through
//! signup-form render               # print the rendered form
//! signup-form submit name=Ada age=36 agree=on
//! signup-form --settings formidable.toml submit --trigger save name=Ada
//! RUST_LOG=debug signup-form
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use formidable::forms::FormSettings;
use formidable::prelude::*;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "signup-form")]
#[command(about = "Render and submit the sign-up form", long_about = None)]
struct Cli {
	/// TOML settings file
	#[arg(long, value_name = "PATH")]
	settings: Option<PathBuf>,

	#[command(subcommand)]
	command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
	/// Print the rendered form
	Render,

	/// POST the given fields to the form
	Submit {
		/// Trigger to select
		#[arg(short, long, default_value = "save")]
		trigger: String,

		/// Form fields as NAME=VALUE
		#[arg(value_name = "NAME=VALUE", value_parser = parse_field)]
		fields: Vec<(String, String)>,
	},

	/// Walk through render, submit, re-render, and rejected requests
	Walkthrough,
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
	raw.split_once('=')
		.map(|(name, value)| (name.to_string(), value.to_string()))
		.ok_or_else(|| format!("expected NAME=VALUE, got '{}'", raw))
}

#[derive(Debug, Deserialize)]
struct ExampleForm {
	name: String,
	age: i64,
	agree: bool,
	nickname: Option<String>,
}

impl FormSchema for ExampleForm {
	fn schema() -> Result<SchemaDescriptor, SchemaError> {
		SchemaDescriptor::builder("ExampleForm")
			.field(FieldDescriptor::new("name", TypeRef::string()).with_title("Your Name"))
			.field(FieldDescriptor::new("age", TypeRef::integer()).with_title("Age"))
			.field(FieldDescriptor::new("agree", TypeRef::boolean()).with_title("I agree to terms"))
			.field(
				FieldDescriptor::new("nickname", TypeRef::union([TypeRef::string(), TypeRef::null()]))
					.with_title("Nickname (optional)"),
			)
			.build()
	}
}

struct Index {
	schema: SchemaDescriptor,
}

impl Index {
	fn new() -> anyhow::Result<Self> {
		Ok(Self {
			schema: ExampleForm::schema().context("invalid ExampleForm schema")?,
		})
	}

	fn save(&self, request: &Request, data: &FormData) -> ActionResult {
		let form: ExampleForm = self.schema.parse(data)?;
		tracing::info!(
			name = %form.name,
			age = form.age,
			agree = form.agree,
			nickname = ?form.nickname,
			"sign-up saved"
		);
		Ok(Response::temporary_redirect(request.path()))
	}
}

impl FormHandler for Index {
	fn schema(&self, _request: &Request) -> &SchemaDescriptor {
		&self.schema
	}

	fn triggers(triggers: &mut TriggerRegistryBuilder<Self>) {
		triggers.trigger("save", "Save", Self::save);
	}
}

fn print_response(label: &str, response: &Response) {
	println!("== {} -> {}", label, response.status);
	if let Some(location) = response.header("location") {
		println!("Location: {}", location);
	}
	if !response.body.is_empty() {
		println!("{}", response.body_text());
	}
	println!();
}

fn walkthrough(router: &Router, trigger_field: &str) {
	let valid = [("name", "A"), ("age", "30"), ("agree", "true")];
	let invalid = [("name", "A"), ("age", "notanumber"), ("agree", "true")];

	let steps = [
		("GET /", Request::get("/")),
		(
			"POST / (valid)",
			Request::post("/", valid.into_iter().chain([(trigger_field, "save")])),
		),
		(
			"POST / (invalid age)",
			Request::post("/", invalid.into_iter().chain([(trigger_field, "save")])),
		),
		(
			"POST / (unknown trigger)",
			Request::post("/", valid.into_iter().chain([(trigger_field, "nuke")])),
		),
		("DELETE /", Request::new(Method::DELETE, "/")),
		("GET /missing", Request::get("/missing")),
	];

	for (label, request) in &steps {
		print_response(label, &router.dispatch(request));
	}
}

fn main() -> anyhow::Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
		)
		.init();

	let cli = Cli::parse();

	let settings = match &cli.settings {
		Some(path) => FormSettings::from_file(path)
			.with_context(|| format!("failed to load settings from {}", path.display()))?,
		None => FormSettings::default(),
	};
	let trigger_field = settings.trigger_field.clone();

	let controller = Arc::new(FormController::with_settings(Index::new()?, settings)?);
	let router = Router::new().route_shared("/", controller.clone());

	match cli.command.unwrap_or(Commands::Walkthrough) {
		Commands::Render => {
			println!("{}", controller.render_form(&Request::get("/")));
		}
		Commands::Submit { trigger, fields } => {
			let request = Request::post("/", fields).with_form([(trigger_field, trigger)]);
			print_response("POST /", &router.dispatch(&request));
		}
		Commands::Walkthrough => walkthrough(&router, &trigger_field),
	}

	Ok(())
}
