use chrono::NaiveDate;
use clap::Parser;
use library_archive::utils::error::ErrorSeverity;
use library_archive::utils::{logger, validation::Validate};
use library_archive::{
    Book, CatalogArchive, CatalogItem, CatalogStore, CliConfig, Clock, Command, FixedClock,
    LibraryConfig, LibraryError, Loan, LoanLedger, LocalStorage, Magazine, Periodicity, SystemClock,
    User,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    let mut config = match &cli.config {
        Some(path) => match LibraryConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => LibraryConfig::default(),
    };
    cli.apply_overrides(&mut config);

    // 初始化日誌
    if config.json_logging() {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting library-archive");
    tracing::debug!("Effective config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let archive = CatalogArchive::from_config(&config);

    if let Err(e) = run(&cli.command, &archive) {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

fn run(command: &Command, archive: &CatalogArchive<LocalStorage>) -> library_archive::Result<()> {
    match command {
        Command::Demo { today } => match today {
            Some(date) => run_demo(archive, FixedClock(*date)),
            None => run_demo(archive, SystemClock),
        },
        Command::List => {
            let store = open_store(archive)?;
            println!("{} item(s) in {}", store.len(), archive.file_name());
            for item in store.items() {
                print_item(item);
            }
            Ok(())
        }
        Command::FindIsbn { isbn } => {
            let store = open_store(archive)?;
            match store.find_by_isbn(isbn) {
                Some(item) => print_item(item),
                None => println!("No item found with ISBN {}", isbn),
            }
            Ok(())
        }
        Command::FindYear { year } => {
            let store = open_store(archive)?;
            let items = store.find_by_publication_year(*year);
            println!("Items published in {}: {}", year, items.len());
            for item in items {
                print_item(item);
            }
            Ok(())
        }
        Command::FindAuthor { author } => {
            let store = open_store(archive)?;
            let books = store.find_by_author(author);
            println!("Books by {}: {}", author, books.len());
            for book in books {
                println!("  {} | {} ({})", book.isbn(), book.title(), book.publication_year());
            }
            Ok(())
        }
        Command::AddBook {
            isbn,
            title,
            year,
            author,
            genre,
            pages,
        } => {
            let item = CatalogItem::from(Book::new(isbn, title, *year, author, genre, *pages));
            add_and_save(archive, item)
        }
        Command::AddMagazine {
            isbn,
            title,
            year,
            issue,
            periodicity,
        } => {
            let item = CatalogItem::from(Magazine::new(isbn, title, *year, *issue, *periodicity));
            add_and_save(archive, item)
        }
        Command::Remove { isbn } => {
            let mut store = open_store(archive)?;
            let removed = store.remove_by_isbn(isbn);
            archive.save(&store)?;
            println!("Removed {} item(s) with ISBN {}", removed, isbn);
            Ok(())
        }
    }
}

/// 檔案不存在時視為空目錄
fn open_store(archive: &CatalogArchive<LocalStorage>) -> library_archive::Result<CatalogStore> {
    let mut store = CatalogStore::new();
    if archive.exists() {
        archive.restore(&mut store)?;
    } else {
        tracing::warn!(
            "Archive {} not found, starting with an empty catalog",
            archive.file_name()
        );
    }
    Ok(store)
}

fn add_and_save(
    archive: &CatalogArchive<LocalStorage>,
    item: CatalogItem,
) -> library_archive::Result<()> {
    item.validate()?;
    library_archive::utils::validation::validate_range(
        "publication_year",
        item.publication_year(),
        0,
        9999,
    )?;

    let mut store = open_store(archive)?;
    println!("Added {} '{}' ({})", item.kind(), item.title(), item.isbn());
    store.add(item);
    archive.save(&store)
}

fn run_demo<C: Clock>(
    archive: &CatalogArchive<LocalStorage>,
    clock: C,
) -> library_archive::Result<()> {
    let today = clock.today();
    let mut store = CatalogStore::new();

    let fellowship = Book::new(
        "978-3-16-148410-0",
        "The Fellowship of the Ring",
        1954,
        "J.R.R. Tolkien",
        "Fantasy",
        1178,
    );
    store.add(fellowship.clone());
    store.add(Magazine::new(
        "123-456-789",
        "National Geographic",
        2024,
        4,
        Periodicity::Monthly,
    ));
    store.add(Book::new(
        "975-3-15-148410-0",
        "The Two Towers",
        1954,
        "J.R.R. Tolkien",
        "Fantasy",
        1179,
    ));

    for isbn in ["978-3-16-148410-0", "975-3-15-148410-0", "123-456-789"] {
        match store.find_by_isbn(isbn) {
            Some(item) => println!("{}: {}", item.kind(), item.title()),
            None => println!("No item found with ISBN {}", isbn),
        }
    }

    println!(
        "Items published in 1954: {}",
        store.find_by_publication_year(1954).len()
    );
    println!(
        "Books by J.R.R. Tolkien: {}",
        store.find_by_author("J.R.R. Tolkien").len()
    );

    archive.save(&store)?;
    let mut reloaded = CatalogStore::new();
    let count = archive.restore(&mut reloaded)?;
    println!("Items in reloaded archive: {}", count);

    let member = User::new("Mario", "Rossi", demo_date(1990, 5, 17)?, "M-0001");
    let mut ledger = LoanLedger::with_clock(clock);
    let start = today
        .checked_sub_days(chrono::Days::new(45))
        .unwrap_or(today);
    ledger.add_loan(Loan::new(&member, &fellowship, start));

    println!(
        "Loans for {} ({}): {}",
        member.full_name(),
        member.membership_id,
        ledger.find_by_member(&member.membership_id).len()
    );
    for loan in ledger.find_overdue() {
        println!(
            "Overdue as of {}: {} lent to {} (due {})",
            today,
            loan.isbn(),
            loan.membership_id(),
            loan.due_date()
        );
    }

    Ok(())
}

fn demo_date(year: i32, month: u32, day: u32) -> library_archive::Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| LibraryError::validation("invalid demo date"))
}

fn print_item(item: &CatalogItem) {
    match item {
        CatalogItem::Book(book) => println!(
            "  [Book] {} | {} ({}) by {}, {}, {} pages",
            book.isbn(),
            book.title(),
            book.publication_year(),
            book.author(),
            book.genre(),
            book.num_pages()
        ),
        CatalogItem::Magazine(magazine) => println!(
            "  [Magazine] {} | {} ({}) issue {}, {}",
            magazine.isbn(),
            magazine.title(),
            magazine.publication_year(),
            magazine.issue_number(),
            magazine.periodicity()
        ),
    }
}
