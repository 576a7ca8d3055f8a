use crate::run::{Host, Port, Run};
use colored::*;

/// Colored terminal rendering of scan results
pub struct DisplayManager {
    use_colors: bool,
    quiet_mode: bool,
}

impl DisplayManager {
    pub fn new() -> Self {
        Self::with_quiet(false)
    }

    pub fn with_quiet(quiet: bool) -> Self {
        // Simple check for color support - assume true for most terminals
        let use_colors = std::env::var("NO_COLOR").is_err() &&
                        std::env::var("TERM").map_or(true, |term| term != "dumb");

        Self {
            use_colors,
            quiet_mode: quiet,
        }
    }

    /// Print the whole report: one block per host, then the summary.
    pub fn print_run(&self, run: &Run) {
        if self.quiet_mode { return; }

        self.print_section_header(&format!("{} {} scan", run.scanner, run.version));
        for host in &run.hosts {
            self.print_host(host);
        }
        self.print_summary(run);
    }

    pub fn print_host(&self, host: &Host) {
        if self.quiet_mode { return; }

        let address = host.primary_address().unwrap_or("unknown");
        let name = host.hostnames.first()
            .map(|h| format!(" ({})", h.name))
            .unwrap_or_default();

        if self.use_colors {
            let state = if host.is_up() {
                host.status.state.bright_green().bold()
            } else {
                host.status.state.bright_black()
            };
            println!("  {} {}{} [{}]",
                "•".bright_green().bold(),
                address.cyan().bold(),
                name.bright_black(),
                state
            );
        } else {
            println!("  • {}{} [{}]", address, name, host.status.state);
        }

        for port in &host.ports {
            self.print_port(port);
        }
        if host.ports.is_empty() {
            if self.use_colors {
                println!("    {}", "No ports reported".bright_black());
            } else {
                println!("    No ports reported");
            }
        }
    }

    fn print_port(&self, port: &Port) {
        let service = port.service.as_ref()
            .map(|s| {
                let detail = [s.product.as_str(), s.version.as_str()]
                    .iter()
                    .filter(|p| !p.is_empty())
                    .copied()
                    .collect::<Vec<_>>()
                    .join(" ");
                if detail.is_empty() {
                    format!(" {}", s.name)
                } else {
                    format!(" {} ({})", s.name, detail.truncate_with_ellipsis(48))
                }
            })
            .unwrap_or_default();
        let id = format!("{}/{}", port.id, port.protocol);

        if self.use_colors {
            let state = match port.state.state.as_str() {
                "open" => port.state.state.bright_green(),
                "closed" => port.state.state.red(),
                _ => port.state.state.yellow(),
            };
            println!("    {} {:<10} {:<14}{}",
                "→".bright_green(),
                id.yellow(),
                state,
                service.bright_black()
            );
        } else {
            println!("    → {:<10} {:<14}{}", id, port.state.state, service);
        }
    }

    pub fn print_summary(&self, run: &Run) {
        if self.quiet_mode { return; }

        let Some(stats) = &run.stats else { return };
        let summary = if stats.finished.summary.is_empty() {
            format!("{} hosts up, {} down", stats.hosts.up, stats.hosts.down)
        } else {
            stats.finished.summary.clone()
        };
        self.print_success(&summary);
    }

    pub fn print_section_header(&self, title: &str) {
        if self.quiet_mode { return; }

        if self.use_colors {
            println!("{}", title.bright_cyan().bold());
            println!("{}", "─".repeat(title.chars().count()).bright_cyan());
        } else {
            println!("{}", title);
            println!("{}", "=".repeat(title.len()));
        }
    }

    /// Summary or confirmation line.
    pub fn print_success(&self, message: &str) {
        self.status_line(Tone::Done, message);
    }

    pub fn print_warning(&self, message: &str) {
        self.status_line(Tone::Caution, message);
    }

    /// Written to stderr, even in quiet mode.
    pub fn print_error(&self, message: &str) {
        if self.use_colors {
            eprintln!("  {} {}", Tone::Failure.marker(), Tone::Failure.paint(message).bold());
        } else {
            eprintln!("[{}] {}", Tone::Failure.symbol(), message);
        }
    }

    /// Echoes the nmap command line about to run.
    pub fn print_command(&self, argv: &[String]) {
        self.status_line(Tone::Note, &format!("Command: {}", argv.join(" ")));
    }

    /// Tool name and version, followed by `notice`.
    pub fn print_banner(&self, notice: &str) {
        if self.quiet_mode { return; }

        let title = format!("rnmap {}", env!("CARGO_PKG_VERSION"));
        if self.use_colors {
            println!("{}  {}", title.bright_white().bold(), notice.bright_black());
        } else {
            println!("{}  {}", title, notice);
        }
    }

    fn status_line(&self, tone: Tone, message: &str) {
        if self.quiet_mode { return; }

        if self.use_colors {
            println!("  {} {}", tone.marker(), tone.paint(message));
        } else {
            println!("[{}] {}", tone.symbol(), message);
        }
    }
}

#[derive(Clone, Copy)]
enum Tone {
    Done,
    Caution,
    Failure,
    Note,
}

impl Tone {
    fn symbol(self) -> &'static str {
        match self {
            Tone::Done => "✓",
            Tone::Caution => "!",
            Tone::Failure => "✗",
            Tone::Note => "›",
        }
    }

    fn paint(self, text: &str) -> ColoredString {
        match self {
            Tone::Done => text.green(),
            Tone::Caution => text.yellow(),
            Tone::Failure => text.red(),
            Tone::Note => text.blue(),
        }
    }

    fn marker(self) -> ColoredString {
        let symbol = self.symbol();
        match self {
            Tone::Done => symbol.bright_green().bold(),
            Tone::Caution => symbol.bright_yellow().bold(),
            Tone::Failure => symbol.bright_red().bold(),
            Tone::Note => symbol.bright_blue().bold(),
        }
    }
}

impl Default for DisplayManager {
    fn default() -> Self {
        Self::new()
    }
}

/// String extension trait for better output formatting
trait StringExt {
    fn truncate_with_ellipsis(&self, max_len: usize) -> String;
}

impl StringExt for str {
    fn truncate_with_ellipsis(&self, max_len: usize) -> String {
        if self.chars().count() <= max_len {
            self.to_string()
        } else {
            let kept: String = self.chars().take(max_len.saturating_sub(3)).collect();
            format!("{}...", kept)
        }
    }
}
