use std::io::Write;

use anyhow::bail;
use quadrant_client::ClientError;
use quadrant_core::entities::{ChatReply, ChatTurn};
use quadrant_core::validation::non_blank;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::root_commands::ChatArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

/// Where a conversation is routed.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Scope {
    company: Option<String>,
    enhanced: bool,
}

impl Scope {
    fn from_args(args: &ChatArgs) -> Self {
        Self {
            company: non_blank(args.company.as_deref()),
            enhanced: args.enhanced,
        }
    }

    async fn ask(&self, ctx: &AppContext, question: &str) -> Result<ChatReply, ClientError> {
        match (&self.company, self.enhanced) {
            (Some(company), true) => ctx.client.chat_enhanced(company, question).await,
            (company, _) => ctx.client.chat(question, company.as_deref()).await,
        }
    }
}

/// Handle `qdr chat`.
pub async fn handle(args: &ChatArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let scope = Scope::from_args(args);
    if args.enhanced && scope.company.is_none() {
        bail!("--enhanced needs a non-empty --company");
    }

    match args.question.as_deref() {
        Some(question) => {
            let Some(question) = non_blank(Some(question)) else {
                bail!("question must not be empty");
            };
            let reply = with_spinner("Thinking", scope.ask(ctx, &question)).await?;
            match flags.format {
                OutputFormat::Table => {
                    println!("{}", reply.text());
                    Ok(())
                }
                _ => output(&reply, flags.format),
            }
        }
        None => session(&scope, ctx, flags).await,
    }
}

enum Input {
    Question(String),
    History,
    Exit,
    Empty,
}

fn classify(line: &str) -> Input {
    match line.trim() {
        "" => Input::Empty,
        "/exit" | "/quit" => Input::Exit,
        "/history" => Input::History,
        question => Input::Question(question.to_string()),
    }
}

/// Interactive loop. The transcript is kept for `/history` only; each
/// question is sent on its own.
async fn session(scope: &Scope, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut history: Vec<ChatTurn> = Vec::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    if !flags.quiet {
        let subject = scope.company.as_deref().unwrap_or("your pipeline");
        eprintln!("Chatting about {subject}. /history shows the transcript, /exit leaves.");
    }

    loop {
        prompt();
        let line = tokio::select! {
            () = ctx.cancel.cancelled() => break,
            line = lines.next_line() => line?,
        };
        let Some(line) = line else { break };

        let question = match classify(&line) {
            Input::Empty => continue,
            Input::Exit => break,
            Input::History => {
                output(&history, flags.format)?;
                continue;
            }
            Input::Question(question) => question,
        };

        history.push(ChatTurn::user(question.as_str()));
        match with_spinner("Thinking", scope.ask(ctx, &question)).await {
            Ok(reply) => {
                println!("{}", reply.text());
                history.push(ChatTurn::assistant(reply.text()));
            }
            Err(ClientError::Cancelled) => break,
            Err(error) => {
                tracing::warn!(%error, "chat request failed");
                eprintln!("error: {error}");
            }
        }
    }

    tracing::debug!(turns = history.len(), "chat session ended");
    Ok(())
}

fn prompt() {
    let mut stderr = std::io::stderr();
    let _ = write!(stderr, "> ");
    let _ = stderr.flush();
}
