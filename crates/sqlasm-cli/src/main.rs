//! sqlasm CLI
//!
//! Renders parameterized SQL statements and their bound arguments as JSON.

mod command;
mod value;

use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use sqlasm_core::{BoundStatement, Dialect, GenericDialect, PostgresDialect};
use sqlasm_mysql::MySqlDialect;

use command::Commands;

/// Dialect-aware assembler for parameterized SQL statements.
#[derive(Parser, Debug)]
#[command(name = "sqlasm")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// SQL dialect deciding identifier quoting and placeholder style.
    #[arg(
        short,
        long,
        value_enum,
        env = "SQLASM_DIALECT",
        default_value_t = DialectArg::Generic,
        global = true
    )]
    dialect: DialectArg,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum DialectArg {
    Generic,
    Postgres,
    Mysql,
}

impl DialectArg {
    fn dialect(self) -> &'static dyn Dialect {
        match self {
            Self::Generic => &GenericDialect,
            Self::Postgres => &PostgresDialect,
            Self::Mysql => &MySqlDialect,
        }
    }
}

/// What gets printed to stdout.
#[derive(Serialize, Debug)]
struct Output {
    dialect: &'static str,
    sql: String,
    args: Vec<serde_json::Value>,
}

impl Output {
    fn new(dialect: &dyn Dialect, stmt: &BoundStatement) -> Self {
        Self {
            dialect: dialect.name(),
            sql: stmt.sql.clone(),
            args: stmt.args.iter().map(value::to_json).collect(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let dialect = cli.dialect.dialect();
    let stmt = cli.command.render(dialect)?;
    info!("Rendered {} argument(s) for {}", stmt.args.len(), dialect.name());

    println!("{}", serde_json::to_string_pretty(&Output::new(dialect, &stmt))?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlasm_core::SqlValue;

    fn render(argv: &[&str]) -> anyhow::Result<Output> {
        let cli = Cli::try_parse_from(argv)?;
        let dialect = cli.dialect.dialect();
        let stmt = cli.command.render(dialect)?;
        Ok(Output::new(dialect, &stmt))
    }

    #[test]
    fn test_select_from_flags() {
        let out = render(&[
            "sqlasm", "select", "-t", "users", "-w", "age > ?", "-a", "21", "-o", "name", "-l",
            "10",
        ])
        .unwrap();

        assert_eq!(out.dialect, "generic");
        assert_eq!(
            out.sql,
            r#"SELECT * FROM "users" WHERE (age > ?) ORDER BY name LIMIT 10;"#
        );
        assert_eq!(out.args, vec![serde_json::json!(21)]);
    }

    #[test]
    fn test_global_dialect_after_subcommand() {
        let out = render(&[
            "sqlasm",
            "update",
            "--table",
            "users",
            "--where",
            "id = ?",
            "--arg",
            "5",
            "--set",
            "name=Bob",
            "--dialect",
            "postgres",
        ])
        .unwrap();

        assert_eq!(out.dialect, "postgres");
        assert_eq!(out.sql, r#"UPDATE "users" SET "name"=$1 WHERE (id = $2);"#);
        assert_eq!(
            out.args,
            vec![serde_json::json!("Bob"), serde_json::json!(5)]
        );
    }

    #[test]
    fn test_mysql_delete() {
        let out = render(&[
            "sqlasm", "-d", "mysql", "delete", "-t", "orders", "-w", "status = ?", "-a",
            "\"cancelled\"",
        ])
        .unwrap();

        assert_eq!(out.sql, "DELETE FROM `orders` WHERE (status = ?);");
        assert_eq!(out.args, vec![serde_json::json!("cancelled")]);
    }

    #[test]
    fn test_count_and_fields() {
        let cli = Cli::try_parse_from([
            "sqlasm", "select", "-t", "t", "-f", "id,name", "--offset", "5",
        ])
        .unwrap();
        let stmt = cli.command.render(cli.dialect.dialect()).unwrap();
        assert_eq!(stmt.sql, r#"SELECT id, name FROM "t" OFFSET 5;"#);

        let out = render(&["sqlasm", "count", "-t", "t", "-w", "flag = ?", "-a", "null"]).unwrap();
        assert_eq!(out.sql, r#"SELECT count(*) FROM "t" WHERE (flag = ?);"#);
        assert_eq!(stmt.args, Vec::<SqlValue>::new());
        assert_eq!(out.args, vec![serde_json::Value::Null]);
    }

    #[test]
    fn test_builder_errors_surface() {
        let err = render(&[
            "sqlasm", "-d", "postgres", "select", "-t", "t", "--force-index", "idx",
        ])
        .unwrap_err();
        assert!(err.to_string().contains("postgres"), "{err}");

        assert!(render(&["sqlasm", "insert", "-t", "t"]).is_err());
        assert!(render(&["sqlasm", "select", "-t", "t", "-a", "1"]).is_err());
    }

    #[test]
    fn test_unknown_dialect_is_rejected() {
        assert!(Cli::try_parse_from(["sqlasm", "-d", "oracle", "delete", "-t", "t"]).is_err());
    }
}
