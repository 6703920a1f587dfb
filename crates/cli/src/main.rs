use anyhow::{anyhow, bail, Context, Result};
use catalog::{sample_courses, Catalog, CourseRecord, LoadState, Scholarship, UniversityView};
use clap::{Parser, Subcommand};
use colored::Colorize;
use finder::{
    default_fee_ranges, search_universities, FeeRange, FilterEngine, FilterField, FilterSelection,
};
use rand::Rng;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::info;

/// Course Finder - search New Zealand university courses
#[derive(Parser)]
#[command(name = "course-finder")]
#[command(about = "Faceted search over university course listings", long_about = None)]
struct Cli {
    /// Course file (.csv or .json); the built-in sample courses are used when omitted
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// JSON file with tuition fee ranges, replacing the default four
    #[arg(long)]
    fee_ranges: Option<PathBuf>,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search courses by text and filters
    Search {
        /// Matches course name, university name or field of study (case-insensitive)
        #[arg(long, default_value = "")]
        term: String,

        #[arg(long, default_value = "")]
        level: String,

        #[arg(long, default_value = "")]
        field: String,

        /// Duration in whole years
        #[arg(long, default_value = "")]
        duration: String,

        /// Fee range label, e.g. "NZD 25,000 - 30,000"
        #[arg(long, default_value = "")]
        fee_range: String,

        #[arg(long, default_value = "")]
        exams: String,

        /// "Yes" or "No"
        #[arg(long, default_value = "")]
        scholarship: String,
    },

    /// List the values every filter can take
    Facets,

    /// List universities, optionally matching a name or location
    Universities {
        #[arg(long, default_value = "")]
        term: String,
    },

    /// Show one university and its courses
    University {
        /// Exact university name
        #[arg(long)]
        name: String,
    },

    /// List courses that offer a described scholarship
    Scholarships,

    /// Time the engine over random filter selections
    Benchmark {
        /// Number of selections to apply
        #[arg(long, default_value = "1000")]
        requests: usize,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let catalog = load_catalog(cli.data.as_deref())?;
    let fee_ranges = match &cli.fee_ranges {
        Some(path) => load_fee_ranges(path)?,
        None => default_fee_ranges(),
    };

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Search {
            term,
            level,
            field,
            duration,
            fee_range,
            exams,
            scholarship,
        } => {
            let mut selection = FilterSelection::new().with_search_term(term);
            for (filter, value) in [
                (FilterField::CourseLevel, level),
                (FilterField::FieldOfStudy, field),
                (FilterField::DurationYears, duration),
                (FilterField::TuitionFeeRange, fee_range),
                (FilterField::ExamsRequired, exams),
                (FilterField::ScholarshipAvailable, scholarship),
            ] {
                selection.set(filter, &value)?;
            }
            handle_search(&catalog, fee_ranges, selection, cli.json)?
        }
        Commands::Facets => handle_facets(&catalog, fee_ranges, cli.json)?,
        Commands::Universities { term } => handle_universities(&catalog, &term, cli.json)?,
        Commands::University { name } => handle_university(&catalog, &name, cli.json)?,
        Commands::Scholarships => handle_scholarships(&catalog, cli.json)?,
        Commands::Benchmark { requests } => handle_benchmark(&catalog, fee_ranges, requests)?,
    }

    Ok(())
}

/// Load the course collection, or fall back to the sample courses
fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    let path = match path {
        Some(path) => path,
        None => {
            info!("No course file given; using the built-in sample courses");
            return Ok(Catalog::from_courses(sample_courses()));
        }
    };

    let start = Instant::now();
    match LoadState::from_result(Catalog::load_from_file(path)) {
        LoadState::Ready(catalog) => {
            info!("Loaded {} in {:?}", path.display(), start.elapsed());
            Ok(catalog)
        }
        LoadState::Failed(message) => Err(anyhow!(
            "Failed to load courses from {}: {}",
            path.display(),
            message
        )),
        LoadState::Loading => bail!("Course load did not complete"),
    }
}

fn load_fee_ranges(path: &Path) -> Result<Vec<FeeRange>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read fee ranges from {}", path.display()))?;
    let ranges: Vec<FeeRange> = serde_json::from_str(&content)
        .with_context(|| format!("Invalid fee ranges in {}", path.display()))?;
    if ranges.is_empty() {
        bail!("{} defines no fee ranges", path.display());
    }
    Ok(ranges)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Handle the 'search' command
fn handle_search(
    catalog: &Catalog,
    fee_ranges: Vec<FeeRange>,
    selection: FilterSelection,
    json: bool,
) -> Result<()> {
    let mut engine = FilterEngine::with_fee_ranges(catalog.courses().to_vec(), fee_ranges);
    engine.apply(selection);

    if json {
        return print_json(engine.results());
    }

    println!(
        "{}",
        format!(
            "{} of {} courses match",
            engine.results().len(),
            engine.courses().len()
        )
        .bold()
        .blue()
    );
    if engine.results().is_empty() {
        println!("No courses found matching your criteria. Try adjusting your filters.");
    }
    for (rank, course) in engine.results().iter().enumerate() {
        print_course(rank + 1, course);
    }
    Ok(())
}

/// Handle the 'facets' command
fn handle_facets(catalog: &Catalog, fee_ranges: Vec<FeeRange>, json: bool) -> Result<()> {
    let engine = FilterEngine::with_fee_ranges(catalog.courses().to_vec(), fee_ranges);
    let facets = engine.facets();

    if json {
        return print_json(&serde_json::json!({
            "courseLevel": facets.course_levels,
            "fieldOfStudy": facets.fields_of_study,
            "durationYears": facets.durations,
            "tuitionFeeRange": engine.fee_range_labels(),
            "examsRequired": facets.exams_required,
            "scholarshipAvailable": facets.scholarship_options(),
        }));
    }

    let durations: Vec<String> = facets.durations.iter().map(|d| d.to_string()).collect();
    let scholarships: Vec<&str> = facets
        .scholarship_options()
        .iter()
        .map(Scholarship::as_str)
        .collect();

    print_facet(FilterField::CourseLevel, &facets.course_levels);
    print_facet(FilterField::FieldOfStudy, &facets.fields_of_study);
    print_facet(FilterField::DurationYears, &durations);
    print_facet(FilterField::TuitionFeeRange, &engine.fee_range_labels());
    print_facet(FilterField::ExamsRequired, &facets.exams_required);
    print_facet(FilterField::ScholarshipAvailable, &scholarships);
    Ok(())
}

fn print_facet<S: AsRef<str>>(field: FilterField, values: &[S]) {
    println!("{}", field.as_str().bold().blue());
    for value in values {
        println!("  {}{}", "• ".green(), value.as_ref());
    }
}

/// Handle the 'universities' command
fn handle_universities(catalog: &Catalog, term: &str, json: bool) -> Result<()> {
    let found = search_universities(catalog.universities(), term);

    if json {
        return print_json(&found);
    }
    if found.is_empty() {
        println!("No universities found matching your search.");
    }
    for university in found {
        println!(
            "{} {} ({} courses)",
            university.name.bold(),
            format!("- {}", university.location).cyan(),
            university.courses.len()
        );
    }
    Ok(())
}

/// Handle the 'university' command
fn handle_university(catalog: &Catalog, name: &str, json: bool) -> Result<()> {
    let university = catalog
        .university(name)
        .ok_or_else(|| anyhow!("University {} not found", name))?;

    if json {
        return print_json(university);
    }
    print_university(university);
    Ok(())
}

fn print_university(university: &UniversityView) {
    println!("{}", university.name.bold().blue());
    println!("{}Location: {}", "• ".green(), university.location);
    if let Some((low, high)) = university.fee_span() {
        println!("{}Tuition Fee Range: NZD {} - NZD {} per year", "• ".green(), low, high);
    }
    println!("{}Courses Offered: {}", "• ".green(), university.courses.len());
    for (rank, course) in university.courses.iter().enumerate() {
        print_course(rank + 1, course);
    }
}

/// Handle the 'scholarships' command
fn handle_scholarships(catalog: &Catalog, json: bool) -> Result<()> {
    let courses = catalog.scholarship_courses();

    if json {
        return print_json(&courses);
    }
    println!("{}", "Scholarship Opportunities:".bold().blue());
    for course in courses {
        println!(
            "{} - {}\n   {}",
            course.university_name.bold(),
            course.course_name,
            course.scholarship_details.green()
        );
    }
    Ok(())
}

/// Handle the 'benchmark' command
fn handle_benchmark(catalog: &Catalog, fee_ranges: Vec<FeeRange>, requests: usize) -> Result<()> {
    if requests == 0 {
        bail!("Benchmark needs at least one request");
    }

    let mut engine = FilterEngine::with_fee_ranges(catalog.courses().to_vec(), fee_ranges);
    let facets = engine.facets().clone();
    let labels: Vec<String> = engine.fee_range_labels().iter().map(|l| l.to_string()).collect();
    let mut rng = rand::rng();

    // Build every selection up front so only the engine is timed
    let selections: Vec<FilterSelection> = (0..requests)
        .map(|_| FilterSelection {
            search_term: String::new(),
            course_level: pick(&mut rng, &facets.course_levels),
            field_of_study: pick(&mut rng, &facets.fields_of_study),
            duration_years: pick(&mut rng, &facets.durations),
            tuition_fee_range: pick(&mut rng, &labels),
            exams_required: pick(&mut rng, &facets.exams_required),
            scholarship_available: pick(&mut rng, facets.scholarship_options()),
        })
        .collect();

    let mut timings: Vec<Duration> = Vec::with_capacity(requests);
    let mut matched = 0;
    for selection in selections {
        let start = Instant::now();
        engine.apply(selection);
        timings.push(start.elapsed());
        matched += engine.results().len();
    }

    let total_time: Duration = timings.iter().sum();
    let avg_latency = total_time / timings.len() as u32;
    timings.sort();
    let percentile = |p: f32| timings[((timings.len() as f32 * p) as usize).min(timings.len() - 1)];
    let throughput = requests as f32 / total_time.as_secs_f32();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Courses: {}", engine.courses().len());
    println!("Selections applied: {}", requests);
    println!("Average matches per selection: {:.2}", matched as f32 / requests as f32);
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} selections/second", throughput);

    Ok(())
}

/// Pick one option at random, or leave the filter unset
fn pick<T: Clone>(rng: &mut impl Rng, options: &[T]) -> Option<T> {
    let idx = rng.random_range(0..=options.len());
    options.get(idx).cloned()
}

/// Helper function to format and print one course
fn print_course(rank: usize, course: &CourseRecord) {
    println!(
        "{}. {} - {} [{}]",
        rank.to_string().green(),
        course.course_name.bold(),
        course.university_name,
        course.location
    );
    println!(
        "   {} | {} | {} years | NZD {} | {}",
        course.course_level,
        course.field_of_study,
        course.duration_years,
        course.tuition_fee_nzd,
        course.exams_required
    );
    println!("   Entry: {}", course.entry_requirements);
    if course.scholarship() == Some(Scholarship::Yes) {
        let details = if course.scholarship_details.is_empty() {
            "Scholarship available"
        } else {
            course.scholarship_details.as_str()
        };
        println!("   {}", details.yellow());
    }
    println!("   Apply: {}", course.apply_link.cyan());
}
