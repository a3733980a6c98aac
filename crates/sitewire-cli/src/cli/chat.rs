//! `sitewire chat` -- interactive assistant session.
//!
//! Prompts for credentials while the client is logged out, then runs an
//! ask loop. The session token lives in an in-memory store for exactly as
//! long as the command runs, like a browser tab session.

use console::style;
use dialoguer::{Input, Password};
use sitewire_core::assistant::AssistantClient;
use sitewire_infra::http::HttpAssistantApi;
use sitewire_infra::store::MemorySessionStore;
use sitewire_types::config::SiteConfig;
use sitewire_types::error::AuthError;
use sitewire_types::message::Origin;

pub async fn run(config: &SiteConfig) -> anyhow::Result<()> {
    let api = HttpAssistantApi::from_config(config);
    let client = AssistantClient::new(api, MemorySessionStore::new());

    while client.login_prompt_visible() {
        let username: String = Input::new().with_prompt("Username").interact_text()?;
        let password = Password::new().with_prompt("Password").interact()?;

        match client.login(&username, &password).await {
            Ok(()) => {
                println!("{}", style("Logged in.").green());
            }
            Err(AuthError::InvalidCredentials) => {
                eprintln!("{}", style("Invalid credentials").red());
            }
            Err(err) => {
                eprintln!("{}", style(format!("Login failed: {err}")).red());
            }
        }
    }

    println!("Ask away (empty line or 'exit' to quit).");

    loop {
        let question: String = Input::new()
            .with_prompt("You")
            .allow_empty(true)
            .interact_text()?;
        let trimmed = question.trim();
        if trimmed.is_empty() || trimmed == "exit" || trimmed == "quit" {
            break;
        }

        let before = client.transcript_len();
        client.ask(&question).await;

        for message in client.messages().iter().skip(before) {
            if message.origin == Origin::Assistant {
                println!("{} {}", style("Assistant:").cyan().bold(), message.text);
            }
        }
    }

    Ok(())
}
