use crate::error::Result;
use crate::tables::{analyze_defining_polynomial, format_table, LogExpTables};
use clap::{value_parser, Arg, ArgMatches, Command};
use std::fmt;

/// Command line of the `gftables` tool
pub fn build_cli() -> Command {
    Command::new("gftables")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate log/exp tables for a Galois field")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("binary")
                .about("GF(2^m) defined by an irreducible polynomial")
                .arg(
                    Arg::new("polynomial")
                        .help("Defining polynomial bits, most significant first (e.g. 100011101)")
                        .required(true)
                        .value_parser(|input: &str| {
                            analyze_defining_polynomial(input)
                                .map(|_| input.to_string())
                                .map_err(|err| err.to_string())
                        }),
                ),
        )
        .subcommand(
            Command::new("prime")
                .about("GF(p) for a prime p")
                .arg(
                    Arg::new("prime")
                        .help("Field order")
                        .required(true)
                        .value_parser(value_parser!(u32)),
                )
                .arg(
                    Arg::new("primitive")
                        .help("Primitive element (searched for when omitted)")
                        .required(false)
                        .value_parser(value_parser!(u32)),
                ),
        )
}

pub fn parse_args() -> ArgMatches {
    build_cli().get_matches()
}

/// Which tables the user asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRequest {
    Binary {
        polynomial: String,
    },
    Prime {
        order: u32,
        primitive_element: Option<u32>,
    },
}

impl TableRequest {
    pub fn from_args(matches: &ArgMatches) -> Option<Self> {
        match matches.subcommand() {
            Some(("binary", sub)) => Some(TableRequest::Binary {
                polynomial: sub.get_one::<String>("polynomial")?.clone(),
            }),
            Some(("prime", sub)) => Some(TableRequest::Prime {
                order: *sub.get_one::<u32>("prime")?,
                primitive_element: sub.get_one::<u32>("primitive").copied(),
            }),
            _ => None,
        }
    }

    pub fn build(&self) -> Result<LogExpTables> {
        match self {
            TableRequest::Binary { polynomial } => {
                LogExpTables::for_binary(&analyze_defining_polynomial(polynomial)?)
            }
            TableRequest::Prime {
                order,
                primitive_element,
            } => LogExpTables::for_prime(*order, *primitive_element),
        }
    }

    /// Header line plus both tables in source-embeddable form
    pub fn render(&self) -> Result<String> {
        let tables = self.build()?;

        let header = match self {
            TableRequest::Binary { polynomial } => {
                format!("GF({}) with prime polynomial {}", tables.order(), polynomial)
            }
            TableRequest::Prime { .. } => format!(
                "GF({}) with primitive element {}",
                tables.order(),
                tables.primitive_element()
            ),
        };

        Ok(format!(
            "{}\n\n{}\n{}",
            header,
            format_table("EXP_TABLE", tables.exp_table()),
            format_table("LOG_TABLE", tables.log_table())
        ))
    }
}

impl fmt::Display for TableRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableRequest::Binary { polynomial } => write!(f, "binary field {polynomial}"),
            TableRequest::Prime {
                order,
                primitive_element: Some(element),
            } => write!(f, "GF({order}) with primitive element {element}"),
            TableRequest::Prime { order, .. } => write!(f, "GF({order})"),
        }
    }
}
