use anyhow::Context;
use clap::Parser;
use log::{LevelFilter, debug, info};
use log4rs::Config;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Logger, Root};
use todo_list::{Todo, TodoList};

/// Builds a todo list from the command line and prints it
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Title shown centred in the list header
    #[arg(short, long, env = "TODO_LIST_TITLE", default_value = "Today's Todos")]
    title: String,

    /// Zero-based index of an item to mark done, may be repeated
    #[arg(short, long = "done", value_name = "INDEX")]
    done: Vec<usize>,

    /// Title of an item to mark done, may be repeated
    #[arg(long = "done-title", value_name = "TITLE")]
    done_titles: Vec<String>,

    /// Mark every item done
    #[arg(long)]
    all_done: bool,

    /// Only print items that are not done yet
    #[arg(long, conflicts_with = "completed")]
    pending: bool,

    /// Only print items that are done
    #[arg(long)]
    completed: bool,

    /// Verbosity of the log written to stderr
    #[arg(long, default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,

    /// Titles of the items to add, in order
    items: Vec<String>,
}

fn init_logging(level: LevelFilter) -> anyhow::Result<()> {
    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .logger(Logger::builder().build("todo_list", level))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    let _log4rs_handle = log4rs::init_config(config)?;
    Ok(())
}

fn build_list(args: &Cli) -> anyhow::Result<TodoList> {
    let mut list = TodoList::new(args.title.as_str());
    list.extend(args.items.iter().map(|title| Todo::new(title.as_str())));
    info!("Built {:?} with {} items", list.title(), list.size());

    for &index in &args.done {
        list.mark_done_at(index)
            .with_context(|| format!("cannot mark item {index} done"))?;
    }
    for title in &args.done_titles {
        list.mark_done(title)
            .with_context(|| format!("cannot mark {title:?} done"))?;
    }
    if args.all_done {
        list.mark_all_done();
    }

    let list = if args.pending {
        list.all_not_done()
    } else if args.completed {
        list.all_done()
    } else {
        list
    };
    debug!("Printing {} items", list.size());
    Ok(list)
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_logging(args.log_level)?;

    let list = build_list(&args)?;
    println!("{list}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("todo-list").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn marks_requested_indices_done() {
        let args = parse(&["--done", "1", "Buy milk", "clean room", "go to gym"]);

        let list = build_list(&args).unwrap();

        assert_eq!(
            list.iter().map(Todo::is_done).collect::<Vec<_>>(),
            [false, true, false]
        );
    }

    #[test]
    fn out_of_range_index_is_an_error() {
        let args = parse(&["--done", "5", "Buy milk"]);

        let error = build_list(&args).unwrap_err();

        assert_eq!(error.to_string(), "cannot mark item 5 done");
    }

    #[test]
    fn marks_requested_titles_done() {
        let args = parse(&["--done-title", "go to gym", "Buy milk", "go to gym"]);

        let list = build_list(&args).unwrap();

        assert!(list.item_at(1).unwrap().is_done());
        assert!(!list.item_at(0).unwrap().is_done());
    }

    #[test]
    fn pending_filters_out_finished_items() {
        let args = parse(&["--pending", "--done", "0", "Buy milk", "clean room"]);

        let list = build_list(&args).unwrap();

        assert_eq!(list.size(), 1);
        assert_eq!(list.first().map(Todo::title).as_deref(), Some("clean room"));
    }

    #[test]
    fn pending_and_completed_conflict() {
        let result = Cli::try_parse_from(["todo-list", "--pending", "--completed"]);
        assert!(result.is_err());
    }
}
