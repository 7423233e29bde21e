//! Shell command parsing
//!
//! Turns one input line into a [`ShellCommand`]. Parsing is pure so the
//! shell's grammar can be tested without a terminal.

/// A parsed shell line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// List the menu, optionally one category
    Menu(Option<String>),
    Categories,
    Add { id: String, quantity: u32 },
    Remove(String),
    Quantity { id: String, quantity: i64 },
    Toggle(String),
    Cart,
    Clear,
    Checkout,
    Packages,
    Guests(String),
    Pick(String),
    Unpick(String),
    Selection,
    Confirm,
    Reset,
    Submit,
    Login,
    Logout,
    Help,
    Quit,
}

/// Why a line could not be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    Unknown(String),
    /// Right command, wrong arguments; carries the usage line
    Usage(&'static str),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Empty => write!(f, "empty command"),
            ParseError::Unknown(cmd) => {
                write!(f, "Unknown command: {} (type 'help' for commands)", cmd)
            }
            ParseError::Usage(usage) => write!(f, "Usage: {}", usage),
        }
    }
}

/// Command reference shown by `help`
pub const HELP: &[(&str, &str)] = &[
    ("menu [category]", "List the menu"),
    ("categories", "List menu categories"),
    ("add <id> [qty]", "Add a dish to the cart"),
    ("remove <id>", "Remove a dish from the cart"),
    ("qty <id> <n>", "Set a cart quantity (0 removes)"),
    ("toggle <id>", "Add or remove a dish"),
    ("cart", "Show the cart"),
    ("clear", "Empty the cart"),
    ("checkout", "Place the order (requires login)"),
    ("packages", "List catering packages"),
    ("guests <count>", "Set the custom package guest count"),
    ("pick <id>", "Add a dish to the custom package"),
    ("unpick <id>", "Remove a dish from the custom package"),
    ("selection", "Show the custom package"),
    ("confirm", "Turn the custom package into a quote request"),
    ("reset", "Start the custom package over"),
    ("submit", "Send the drafted quote request"),
    ("login", "Sign in"),
    ("logout", "Sign out"),
    ("help", "Show this help"),
    ("quit", "Exit"),
];

impl ShellCommand {
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(ParseError::Empty);
        };
        let args: Vec<&str> = words.collect();
        let head = head.trim_start_matches('/').to_lowercase();

        let one = |usage: &'static str| -> Result<String, ParseError> {
            match args.as_slice() {
                [id] => Ok(id.to_string()),
                _ => Err(ParseError::Usage(usage)),
            }
        };
        let none = |cmd: ShellCommand| -> Result<ShellCommand, ParseError> {
            if args.is_empty() {
                Ok(cmd)
            } else {
                Err(ParseError::Usage(usage_of(&cmd)))
            }
        };

        match head.as_str() {
            "menu" | "m" => match args.as_slice() {
                [] => Ok(ShellCommand::Menu(None)),
                [category] => Ok(ShellCommand::Menu(Some(category.to_lowercase()))),
                _ => Err(ParseError::Usage("menu [category]")),
            },
            "categories" | "cats" => none(ShellCommand::Categories),
            "add" | "a" => match args.as_slice() {
                [id] => Ok(ShellCommand::Add {
                    id: id.to_string(),
                    quantity: 1,
                }),
                [id, qty] => qty
                    .parse::<u32>()
                    .map(|quantity| ShellCommand::Add {
                        id: id.to_string(),
                        quantity,
                    })
                    .map_err(|_| ParseError::Usage("add <id> [qty]")),
                _ => Err(ParseError::Usage("add <id> [qty]")),
            },
            "remove" | "rm" => one("remove <id>").map(ShellCommand::Remove),
            "qty" => match args.as_slice() {
                [id, qty] => qty
                    .parse::<i64>()
                    .map(|quantity| ShellCommand::Quantity {
                        id: id.to_string(),
                        quantity,
                    })
                    .map_err(|_| ParseError::Usage("qty <id> <n>")),
                _ => Err(ParseError::Usage("qty <id> <n>")),
            },
            "toggle" | "t" => one("toggle <id>").map(ShellCommand::Toggle),
            "cart" | "c" => none(ShellCommand::Cart),
            "clear" => none(ShellCommand::Clear),
            "checkout" => none(ShellCommand::Checkout),
            "packages" | "pkgs" => none(ShellCommand::Packages),
            // Free text, validated when the quote is submitted
            "guests" | "g" => {
                if args.is_empty() {
                    Err(ParseError::Usage("guests <count>"))
                } else {
                    Ok(ShellCommand::Guests(args.join(" ")))
                }
            }
            "pick" | "p" => one("pick <id>").map(ShellCommand::Pick),
            "unpick" | "u" => one("unpick <id>").map(ShellCommand::Unpick),
            "selection" | "sel" => none(ShellCommand::Selection),
            "confirm" => none(ShellCommand::Confirm),
            "reset" => none(ShellCommand::Reset),
            "submit" => none(ShellCommand::Submit),
            "login" => none(ShellCommand::Login),
            "logout" => none(ShellCommand::Logout),
            "help" | "h" | "?" => Ok(ShellCommand::Help),
            "quit" | "exit" | "q" => Ok(ShellCommand::Quit),
            _ => Err(ParseError::Unknown(head)),
        }
    }
}

fn usage_of(cmd: &ShellCommand) -> &'static str {
    match cmd {
        ShellCommand::Categories => "categories",
        ShellCommand::Cart => "cart",
        ShellCommand::Clear => "clear",
        ShellCommand::Checkout => "checkout",
        ShellCommand::Packages => "packages",
        ShellCommand::Selection => "selection",
        ShellCommand::Confirm => "confirm",
        ShellCommand::Reset => "reset",
        ShellCommand::Submit => "submit",
        ShellCommand::Login => "login",
        ShellCommand::Logout => "logout",
        _ => "help",
    }
}
