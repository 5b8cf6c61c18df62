use clap::{Args, Parser, Subcommand};
use lexis::model::SortOption;

#[derive(Parser, Debug)]
#[command(name = "lexis", bin_name = "lexis", version)]
#[command(about = "Personal vocabulary and phrase-book manager", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage vocabulary words
    #[command(subcommand)]
    #[command(alias = "w")]
    Word(WordCommands),

    /// Manage sentences and phrases
    #[command(subcommand)]
    #[command(alias = "s")]
    Sentence(SentenceCommands),

    /// Get or set configuration
    Config {
        /// Configuration key (default-sort, glossary)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Print the paths of the data files
    Paths,
}

#[derive(Subcommand, Debug)]
pub enum WordCommands {
    /// Add a new word
    #[command(alias = "a")]
    Add(AddWordArgs),

    /// List words
    #[command(alias = "ls")]
    List {
        /// Match word, translation, definition or tag (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,

        /// Sort order: newest, oldest or alphabetical
        #[arg(long)]
        sort: Option<SortOption>,
    },

    /// Show words in full
    #[command(alias = "v")]
    View {
        /// Indexes or ids of the words (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Replace the notes of a word (no text clears them)
    Note {
        /// Index or id of the word
        selector: String,

        /// New note text
        #[arg(num_args = 0..)]
        note: Vec<String>,
    },

    /// Delete one or more words
    #[command(alias = "rm")]
    Delete {
        /// Indexes or ids of the words (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Args, Debug)]
pub struct AddWordArgs {
    /// The headword
    pub word: String,

    /// Direct translation
    #[arg(short, long, default_value = "")]
    pub translation: String,

    /// Definition
    #[arg(short, long, default_value = "")]
    pub definition: String,

    /// Part of speech (e.g. noun, verb)
    #[arg(short = 'p', long = "pos", default_value = "")]
    pub part_of_speech: String,

    /// Example sentence (repeatable)
    #[arg(short = 'e', long = "example")]
    pub examples: Vec<String>,

    /// Tag (repeatable)
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// Free-form notes
    #[arg(short, long, default_value = "")]
    pub notes: String,

    /// Fill empty fields from the configured glossary
    #[arg(short, long)]
    pub lookup: bool,
}

#[derive(Subcommand, Debug)]
pub enum SentenceCommands {
    /// Add a new sentence
    #[command(alias = "a")]
    Add {
        /// The sentence text
        content: String,

        /// Translation of the sentence
        #[arg(short, long)]
        translation: String,

        /// Category used for grouping
        #[arg(short, long, default_value = "")]
        category: String,

        /// Free-form notes
        #[arg(short, long, default_value = "")]
        notes: String,
    },

    /// List sentences, newest first
    #[command(alias = "ls")]
    List {
        /// Match sentence or translation (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,

        /// Only show this category (ALL for every category)
        #[arg(short, long, default_value = "ALL")]
        category: String,
    },

    /// Show sentences in full
    #[command(alias = "v")]
    View {
        /// Indexes or ids of the sentences
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Delete one or more sentences
    #[command(alias = "rm")]
    Delete {
        /// Indexes or ids of the sentences
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// List the categories in use
    Categories,
}
