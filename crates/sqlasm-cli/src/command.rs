//! Subcommands and their translation into builder calls.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use tracing::debug;

use sqlasm_core::builder::{count_placeholders, HasTable};
use sqlasm_core::{raw, Assignment, BoundStatement, Dialect, QueryBuilder, SqlValue};

use crate::value::{parse_pair, parse_value};

/// Table and WHERE predicates shared by every filtering statement.
#[derive(Args, Debug)]
pub struct Filter {
    /// Table name (quoted for the dialect).
    #[arg(short, long)]
    pub table: String,

    /// WHERE predicate written with `?` placeholders (repeatable, joined with AND).
    #[arg(short = 'w', long = "where", value_name = "FRAGMENT")]
    pub predicates: Vec<String>,

    /// Value for the next `?` across the predicates, in order (repeatable).
    #[arg(short, long = "arg", value_name = "VALUE")]
    pub args: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a SELECT statement.
    Select {
        #[command(flatten)]
        filter: Filter,

        /// Projected fields, comma separated (defaults to `*`).
        #[arg(short, long, value_delimiter = ',')]
        fields: Vec<String>,

        /// Index to force after the table name.
        #[arg(long)]
        force_index: Option<String>,

        /// ORDER BY fragment.
        #[arg(short, long)]
        order_by: Option<String>,

        /// LIMIT.
        #[arg(short, long)]
        limit: Option<u64>,

        /// OFFSET.
        #[arg(long)]
        offset: Option<u64>,

        /// Text placed before SELECT, e.g. an optimizer hint comment.
        #[arg(long)]
        hint: Option<String>,
    },

    /// Render a `SELECT count(*)` statement.
    Count {
        #[command(flatten)]
        filter: Filter,

        /// Text placed before SELECT.
        #[arg(long)]
        hint: Option<String>,
    },

    /// Render an INSERT statement.
    Insert {
        /// Table name.
        #[arg(short, long)]
        table: String,

        /// Column value as COLUMN=VALUE (repeatable).
        #[arg(short = 's', long = "set", value_name = "COLUMN=VALUE", value_parser = parse_pair, required = true)]
        values: Vec<(String, String)>,
    },

    /// Render an UPDATE statement.
    Update {
        #[command(flatten)]
        filter: Filter,

        /// Assignment as COLUMN=VALUE (repeatable).
        #[arg(short = 's', long = "set", value_name = "COLUMN=VALUE", value_parser = parse_pair)]
        values: Vec<(String, String)>,

        /// Assignment as COLUMN=EXPRESSION, spliced verbatim with `?` placeholders (repeatable).
        #[arg(long = "set-raw", value_name = "COLUMN=EXPRESSION", value_parser = parse_pair)]
        expressions: Vec<(String, String)>,

        /// Value for the next `?` across the raw expressions, in order (repeatable).
        #[arg(long = "raw-arg", value_name = "VALUE")]
        raw_args: Vec<String>,
    },

    /// Render a DELETE statement.
    Delete {
        #[command(flatten)]
        filter: Filter,
    },
}

impl Commands {
    /// Renders the statement this command describes.
    pub fn render(self, dialect: &dyn Dialect) -> Result<BoundStatement> {
        let stmt = match self {
            Self::Select {
                filter,
                fields,
                force_index,
                order_by,
                limit,
                offset,
                hint,
            } => {
                let mut builder = filter.apply(dialect)?;
                if !fields.is_empty() {
                    let fields: Vec<&str> = fields.iter().map(String::as_str).collect();
                    builder = builder.fields(&fields);
                }
                if let Some(index) = force_index {
                    builder = builder.force_index(&index);
                }
                if let Some(order) = order_by {
                    builder = builder.order_by(&order);
                }
                if let Some(n) = limit {
                    builder = builder.limit(n);
                }
                if let Some(n) = offset {
                    builder = builder.offset(n);
                }
                if let Some(hint) = hint {
                    builder = builder.hint(&hint);
                }
                builder.select()?
            }
            Self::Count { filter, hint } => {
                let mut builder = filter.apply(dialect)?;
                if let Some(hint) = hint {
                    builder = builder.hint(&hint);
                }
                builder.count()?
            }
            Self::Insert { table, values } => QueryBuilder::new(dialect).table(&table).insert(
                values
                    .into_iter()
                    .map(|(column, value)| (column, parse_value(&value))),
            )?,
            Self::Update {
                filter,
                values,
                expressions,
                raw_args,
            } => {
                let fragments: Vec<&str> = expressions.iter().map(|(_, e)| e.as_str()).collect();
                let mut raw_values = distribute(&fragments, &raw_args)?.into_iter();

                let mut assignments: Vec<(String, Assignment)> = values
                    .into_iter()
                    .map(|(column, value)| (column, Assignment::Value(parse_value(&value))))
                    .collect();
                for (column, expression) in expressions {
                    let args = raw_values.next().unwrap_or_default();
                    assignments.push((column, raw(expression, args).into()));
                }

                filter.apply(dialect)?.update(assignments)?
            }
            Self::Delete { filter } => filter.apply(dialect)?.delete()?,
        };
        Ok(stmt)
    }
}

impl Filter {
    fn apply(self, dialect: &dyn Dialect) -> Result<QueryBuilder<'_, HasTable>> {
        let fragments: Vec<&str> = self.predicates.iter().map(String::as_str).collect();
        let grouped = distribute(&fragments, &self.args)?;

        let mut builder = QueryBuilder::new(dialect).table(&self.table);
        for (fragment, args) in self.predicates.into_iter().zip(grouped) {
            builder = builder.and_where(fragment, args);
        }
        Ok(builder)
    }
}

/// Hands out `args` to `fragments` in order, as many as each has `?`.
fn distribute(fragments: &[&str], args: &[String]) -> Result<Vec<Vec<SqlValue>>> {
    let mut rest = args.iter().map(|a| parse_value(a));
    let mut grouped = Vec::with_capacity(fragments.len());
    for fragment in fragments {
        let wanted = count_placeholders(fragment);
        let taken: Vec<SqlValue> = rest.by_ref().take(wanted).collect();
        if taken.len() < wanted {
            bail!(
                "fragment '{fragment}' has {wanted} placeholder(s) but only {} argument(s) remain",
                taken.len()
            );
        }
        debug!(fragment = *fragment, args = taken.len(), "distributed arguments");
        grouped.push(taken);
    }
    let leftover = rest.count();
    if leftover > 0 {
        bail!("{leftover} argument(s) left over after filling every placeholder");
    }
    Ok(grouped)
}
