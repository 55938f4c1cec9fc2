use crate::config::ChatConfig;
use crate::error::Result;
use crate::models::MessageRequest;
use crate::panel::{ConversationPanel, PanelEvent, RelayClient, Submission};
use crate::ui::{
    display_command_outcome, display_diagnostic, display_error, display_login_prompt,
    display_open_tab, display_turn, open_in_browser,
};
use colored::*;
use std::io::{self, Write};
use tokio::io::{AsyncBufReadExt, BufReader};

pub struct ChatContext {
    pub config: ChatConfig,
    pub panel: ConversationPanel,
    pub client: RelayClient,
}

/// Interactive loop: one line in, at most one round trip out. Each response
/// is awaited before the next line is read, so replies arrive in order.
pub async fn run(mut context: ChatContext) -> Result<()> {
    if context.config.verbose {
        display_diagnostic(&format!("relay: {}", context.client.endpoint()));
        display_diagnostic(&format!("state: {}", context.panel.status()));
    }

    let initial = context.panel.initial_request();
    let mut awaiting_login = exchange(&mut context, &initial).await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("{} ", ">".cyan().bold());
        io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };

        let submission = if awaiting_login {
            awaiting_login = false;
            context.panel.login()
        } else {
            context.panel.submit(&line)
        };

        match submission {
            Submission::Blank => continue,
            Submission::Command(outcome) => display_command_outcome(&outcome),
            Submission::Send { request, turn } => {
                display_turn(&turn);
                awaiting_login = exchange(&mut context, &request).await;
            }
        }
    }

    Ok(())
}

/// Send one request and act on the panel's reaction. Returns true when the
/// response asked for a login.
async fn exchange(context: &mut ChatContext, request: &MessageRequest) -> bool {
    let response = match context.client.send(request).await {
        Ok(response) => response,
        Err(e) => {
            display_error(&e);
            return false;
        }
    };

    let mut login_requested = false;

    for event in context.panel.receive(response) {
        match event {
            PanelEvent::Turn(turn) => display_turn(&turn),
            PanelEvent::OpenTab { url } => {
                let opened = context.config.open_tabs
                    && match open_in_browser(&url) {
                        Ok(()) => true,
                        Err(e) => {
                            if context.config.verbose {
                                display_diagnostic(&format!("browser launch failed: {}", e));
                            }
                            false
                        }
                    };
                display_open_tab(&url, opened);
            }
            PanelEvent::LoginPrompt { id_name } => {
                display_login_prompt(&id_name);
                login_requested = true;
            }
            PanelEvent::Diagnostic(message) => {
                if context.config.verbose {
                    display_diagnostic(&message);
                }
            }
        }
    }

    login_requested
}
