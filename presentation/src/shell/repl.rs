//! REPL for browsing the menu and building orders interactively

use super::command::{HELP, ParseError, ShellCommand};
use crate::ConsoleFormatter;
use crate::ProgressReporter;
use colored::Colorize;
use kababhut_application::{
    AuthGateway, Catalog, CheckoutOutcome, CheckoutUseCase, InquiryGateway,
    LoginError, LoginUseCase, NoProgress, OnboardingStore, ProgressNotifier, StorefrontSession,
    SubmitInquiryError, SubmitInquiryUseCase, TokenStore,
};
use kababhut_domain::{AddOutcome, Credentials, DomainError};
use rustyline::completion::Completer;
use rustyline::config::{ColorMode, Configurer};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{DefaultEditor, Editor, Helper, Result as RlResult};
use std::borrow::Cow;
use std::path::PathBuf;
use std::sync::Arc;

/// Interactive storefront shell
pub struct StorefrontShell {
    session: StorefrontSession,
    submit: SubmitInquiryUseCase<dyn InquiryGateway>,
    login: LoginUseCase<dyn AuthGateway, dyn TokenStore>,
    checkout: CheckoutUseCase<dyn TokenStore>,
    catalog: Arc<dyn Catalog>,
    onboarding: Arc<dyn OnboardingStore>,
    show_progress: bool,
    history_path: Option<PathBuf>,
}

impl StorefrontShell {
    pub fn new(
        session: StorefrontSession,
        submit: SubmitInquiryUseCase<dyn InquiryGateway>,
        login: LoginUseCase<dyn AuthGateway, dyn TokenStore>,
        checkout: CheckoutUseCase<dyn TokenStore>,
        catalog: Arc<dyn Catalog>,
        onboarding: Arc<dyn OnboardingStore>,
    ) -> Self {
        Self {
            session,
            submit,
            login,
            checkout,
            catalog,
            onboarding,
            show_progress: true,
            history_path: dirs::data_dir().map(|p| p.join("kababhut").join("history.txt")),
        }
    }

    /// Set whether to show progress spinners
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Override where line history is kept (`None` disables it)
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_path = path;
        self
    }

    /// Run the interactive shell
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(ref path) = self.history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            match rl.readline("kababhut> ") {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(line);

                    match ShellCommand::parse(line) {
                        Ok(ShellCommand::Quit) => {
                            println!("Khuda hafiz!");
                            break;
                        }
                        Ok(command) => self.dispatch(command, &mut rl).await,
                        Err(ParseError::Empty) => {}
                        Err(e) => println!("{}", e.to_string().yellow()),
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Khuda hafiz!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = self.history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│            Kabab Hut - Storefront           │");
        println!("╰─────────────────────────────────────────────╯");
        println!();

        if !self.onboarding.has_completed() {
            println!("{}", "First time here? A quick tour:".bold());
            println!("  1. {} lists every dish; {} narrows it down", "menu".cyan(), "menu <category>".cyan());
            println!("  2. {} puts a dish in your cart, {} shows it", "add <id>".cyan(), "cart".cyan());
            println!(
                "  3. Planning an event? {} a few dishes, set {}, then {} and {}",
                "pick".cyan(),
                "guests".cyan(),
                "confirm".cyan(),
                "submit".cyan()
            );
            println!("  4. {} lists every command", "help".cyan());
            println!();
            self.onboarding.mark_complete();
        }

        println!(
            "{} dishes on the menu. Type 'help' for commands.",
            self.session.menu().len()
        );
        println!();
    }

    fn progress(&self) -> Box<dyn ProgressNotifier> {
        if self.show_progress {
            Box::new(ProgressReporter::new())
        } else {
            Box::new(NoProgress)
        }
    }

    async fn dispatch(&mut self, command: ShellCommand, rl: &mut DefaultEditor) {
        match command {
            ShellCommand::Menu(category) => {
                print!(
                    "{}",
                    ConsoleFormatter::menu_body(self.session.menu(), category.as_deref())
                );
            }
            ShellCommand::Categories => {
                print!("{}", ConsoleFormatter::format_categories(self.session.menu()));
            }
            ShellCommand::Add { id, quantity } => match self.session.add_to_cart(&id, quantity) {
                Ok(()) => self.print_cart_line(&id),
                Err(e) => report_domain_error(&e),
            },
            ShellCommand::Remove(id) => {
                self.session.remove_from_cart(&id);
                print!("{}", ConsoleFormatter::format_cart(self.session.cart()));
            }
            ShellCommand::Quantity { id, quantity } => {
                self.session.set_quantity(&id, quantity);
                print!("{}", ConsoleFormatter::format_cart(self.session.cart()));
            }
            ShellCommand::Toggle(id) => match self.session.toggle_in_cart(&id) {
                Ok(true) => self.print_cart_line(&id),
                Ok(false) => println!("Removed {} from the cart", id),
                Err(e) => report_domain_error(&e),
            },
            ShellCommand::Cart => {
                print!("{}", ConsoleFormatter::format_cart(self.session.cart()));
            }
            ShellCommand::Clear => {
                self.session.cart_mut().clear();
                println!("Cart cleared");
            }
            ShellCommand::Checkout => match self.checkout.execute(self.session.cart_mut()) {
                Ok(outcome) => {
                    print!("{}", ConsoleFormatter::format_checkout(&outcome));
                    if matches!(outcome, CheckoutOutcome::LoginRequired) {
                        println!("Type 'login' to sign in.");
                    }
                }
                Err(e) => eprintln!("{} {}", "Error:".red().bold(), e),
            },
            ShellCommand::Packages => {
                let packages = self.catalog.packages();
                print!(
                    "{}",
                    ConsoleFormatter::format_packages(&packages, self.session.customizer().limits())
                );
            }
            ShellCommand::Guests(text) => {
                self.session.set_guest_count(text);
                print!(
                    "{}",
                    ConsoleFormatter::format_selection(self.session.customizer())
                );
            }
            ShellCommand::Pick(id) => match self.session.pick(&id) {
                Ok(AddOutcome::Added) => print!(
                    "{}",
                    ConsoleFormatter::format_selection(self.session.customizer())
                ),
                Ok(AddOutcome::AlreadySelected) => println!("{} is already in your package", id),
                Err(e) => report_domain_error(&e),
            },
            ShellCommand::Unpick(id) => {
                self.session.unpick(&id);
                print!(
                    "{}",
                    ConsoleFormatter::format_selection(self.session.customizer())
                );
            }
            ShellCommand::Selection => {
                print!(
                    "{}",
                    ConsoleFormatter::format_selection(self.session.customizer())
                );
            }
            ShellCommand::Confirm => match self.session.confirm_package() {
                Ok(replaced) => {
                    if let Some(old) = replaced {
                        println!(
                            "{}",
                            format!(
                                "Replaced your unsent quote request for {} guests",
                                old.headcount
                            )
                            .yellow()
                        );
                    }
                    if let Some(quote) = self.session.draft() {
                        print!("{}", ConsoleFormatter::format_quote(quote));
                    }
                    println!("Type 'submit' to send it.");
                }
                Err(e) => report_domain_error(&e),
            },
            ShellCommand::Reset => {
                self.session.reset_package();
                println!("Package selection cleared");
            }
            ShellCommand::Submit => self.submit_draft(rl).await,
            ShellCommand::Login => self.sign_in(rl).await,
            ShellCommand::Logout => match self.login.logout() {
                Ok(()) => println!("Signed out"),
                Err(e) => eprintln!("{} {}", "Error:".red().bold(), e),
            },
            ShellCommand::Help => print_help(),
            ShellCommand::Quit => {}
        }
    }

    fn print_cart_line(&self, id: &str) {
        if let Some(line) = self.session.cart().line(id) {
            println!(
                "{} x{} in cart ({} items total)",
                line.name,
                line.quantity,
                self.session.cart().item_count()
            );
        }
    }

    async fn submit_draft(&mut self, rl: &mut DefaultEditor) {
        let Some(draft) = self.session.draft().cloned() else {
            println!("Nothing to submit. Build a package and 'confirm' it first.");
            return;
        };

        let Some(name) = prompt(rl, "Name: ") else { return };
        let Some(email) = prompt(rl, "Email: ") else { return };
        let Some(phone) = prompt(rl, "Phone: ") else { return };
        let Some(date) = prompt(rl, "Event date: ") else { return };

        let quote = draft.with_contact(name, email, phone).with_event_date(date);
        let progress = self.progress();
        match self.submit.execute_with_progress(quote, progress.as_ref()).await {
            Ok(receipt) => {
                print!("{}", ConsoleFormatter::format_receipt(&receipt));
                if !self.session.complete_submission(&receipt) {
                    println!("Your draft is kept; try 'submit' again.");
                }
            }
            Err(SubmitInquiryError::Delivery(e)) => {
                eprintln!("{} {}", "Could not send your request:".red().bold(), e);
                println!("Your draft is kept; try 'submit' again.");
            }
            Err(e) => println!("{}", e.to_string().yellow()),
        }
    }

    async fn sign_in(&mut self, rl: &mut DefaultEditor) {
        let Some(email) = prompt(rl, "Email: ") else { return };
        let password = match std::env::var(PASSWORD_ENV) {
            Ok(password) if !password.is_empty() => password,
            _ => match read_password("Password: ") {
                Some(password) => password,
                None => return,
            },
        };

        let progress = self.progress();
        match self
            .login
            .execute_with_progress(&Credentials::new(email, password), progress.as_ref())
            .await
        {
            Ok(outcome) => println!(
                "{} Signed in; your dashboard is {}",
                "✓".green(),
                outcome.route.path()
            ),
            Err(LoginError::InvalidCredentials) => println!("{}", "Invalid credentials".yellow()),
            Err(e) => eprintln!("{} {}", "Error:".red().bold(), e),
        }
    }
}

/// Environment variable consulted before prompting for a password
const PASSWORD_ENV: &str = "KABABHUT_PASSWORD";

/// Draws every typed character as `*`
struct PasswordMask;

impl Highlighter for PasswordMask {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Owned("*".repeat(line.chars().count()))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }
}

impl Completer for PasswordMask {
    type Candidate = String;
}

impl Hinter for PasswordMask {
    type Hint = String;
}

impl Validator for PasswordMask {}

impl Helper for PasswordMask {}

/// Read a password without echoing it; kept out of the shell history
fn read_password(label: &str) -> Option<String> {
    let mut editor = match Editor::<PasswordMask, DefaultHistory>::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            return None;
        }
    };
    editor.set_helper(Some(PasswordMask));
    editor.set_color_mode(ColorMode::Forced);
    editor.set_auto_add_history(false);

    match editor.readline(label) {
        Ok(password) => Some(password),
        Err(_) => {
            println!("Cancelled");
            None
        }
    }
}

/// Read one line; `None` when the user cancels
fn prompt(rl: &mut DefaultEditor, label: &str) -> Option<String> {
    match rl.readline(label) {
        Ok(line) => Some(line.trim().to_string()),
        Err(_) => {
            println!("Cancelled");
            None
        }
    }
}

fn report_domain_error(e: &DomainError) {
    if e.is_rejection() {
        println!("{}", e.to_string().yellow());
    } else {
        eprintln!("{} {}", "Error:".red().bold(), e);
    }
}

fn print_help() {
    println!();
    println!("Commands:");
    for (usage, description) in HELP {
        println!("  {:<18} - {}", usage, description);
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_mask_hides_every_character() {
        let mask = PasswordMask;
        assert_eq!(mask.highlight("hunter2", 7), "*******");
        assert_eq!(mask.highlight("pässwörd", 0), "********");
        assert_eq!(mask.highlight("", 0), "");
        assert!(mask.highlight_char("a", 1, CmdKind::Other));
    }
}
