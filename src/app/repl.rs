use std::path::PathBuf;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::app::commands::{self, Command};
use crate::app::render;
use crate::config::{Config, OutputFormat};
use crate::core::export::write_export;
use crate::core::session::Session;
use crate::utils::MoviepickResult;

/// What the loop should do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Continue(String),
    Quit,
}

/// Drives a [`Session`] from typed commands. Each command runs to completion,
/// summary included, before the next line is read.
pub struct Repl {
    session: Session,
    format: OutputFormat,
    export_dir: PathBuf,
    export_file: String,
}

impl Repl {
    pub fn new(session: Session, config: &Config) -> Self {
        Self {
            session,
            format: config.output.format,
            export_dir: PathBuf::from(&config.export.output_dir),
            export_file: config.export.file_name.clone(),
        }
    }

    #[cfg(test)]
    pub fn session(&self) -> &Session {
        &self.session
    }

    fn view(&self) -> MoviepickResult<String> {
        render::render_view(&self.session.render(), self.format)
    }

    pub async fn execute(&mut self, command: Command) -> MoviepickResult<Step> {
        let out = match command {
            Command::List => self.view()?,
            Command::Genres => {
                let view = self.session.render();
                render::render_genres(&view.genres, &view.filter, self.format)?
            }
            Command::Filter(genre) => {
                self.session.set_filter(&genre);
                self.view()?
            }
            Command::Set { position, checked } => {
                let summary = position
                    .checked_sub(1)
                    .and_then(|index| self.session.set_visible(index, checked));
                match summary {
                    Some(summary) => summary.to_string(),
                    None => format!(
                        "No movie at position {position} ({} visible)",
                        self.session.visible().len()
                    ),
                }
            }
            Command::SelectAll(selected) => {
                self.session.select_all_visible(selected);
                self.view()?
            }
            Command::Summary => self.session.summary().to_string(),
            Command::Export => {
                match write_export(self.session.export(), &self.export_dir, &self.export_file).await? {
                    Some(path) => format!("Exported to {}", path.display()),
                    None => "Nothing selected: no file written".to_string(),
                }
            }
            Command::Help => commands::HELP.to_string(),
            Command::Quit => return Ok(Step::Quit),
        };
        Ok(Step::Continue(out))
    }

    pub async fn run<R: AsyncBufRead + Unpin>(&mut self, input: R) -> MoviepickResult<()> {
        println!("{}", self.view()?);

        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            let command = match commands::parse_command(&line) {
                Ok(c) => c,
                Err(commands::ParseError::Empty) => continue,
                Err(e) => {
                    println!("{e}");
                    continue;
                }
            };

            match self.execute(command).await {
                Ok(Step::Continue(out)) => println!("{out}"),
                Ok(Step::Quit) => break,
                Err(e) => {
                    tracing::error!("Command failed: {e}");
                    println!("Error: {e}");
                }
            }
        }
        Ok(())
    }
}
