use boolean_function_metrics::{analyze_timed, AnalysisOptions, BooleanFunction};
use std::time::{Duration, Instant};

const DEFAULT_VARIABLES: usize = 20;
const ANALYSIS_VARIABLES: usize = 10;
const ROUNDS: u32 = 10;

// xorshift64, same table from one run to the next
fn pseudo_random_function(num_variables: usize) -> BooleanFunction {
    let mut state = 0x9e3779b97f4a7c15u64;
    let truth_table = (0..(1usize << num_variables))
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state & 1) as u8
        })
        .collect::<Vec<u8>>();
    BooleanFunction::from_truth_table(&truth_table).unwrap()
}

fn main() {
    env_logger::init();
    let num_variables = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<usize>().unwrap())
        .unwrap_or(DEFAULT_VARIABLES);
    let workers = std::thread::available_parallelism().map_or(1, |n| n.get());
    println!("FWHT, n = {}, {} workers, {} rounds", num_variables, workers, ROUNDS);

    let mut sequential = Duration::ZERO;
    for _ in 0..ROUNDS {
        // the spectrum is cached, each round needs a new function
        let boolean_function = pseudo_random_function(num_variables);
        let start = Instant::now();
        boolean_function.walsh_hadamard_spectrum();
        sequential += start.elapsed();
    }
    let sequential = sequential / ROUNDS;

    let boolean_function = pseudo_random_function(num_variables);
    // first call builds the pool
    let spectrum = boolean_function.walsh_hadamard_spectrum_parallel(workers);
    assert_eq!(spectrum, boolean_function.walsh_hadamard_spectrum());
    let start = Instant::now();
    for _ in 0..ROUNDS {
        boolean_function.walsh_hadamard_spectrum_parallel(workers);
    }
    let parallel = start.elapsed() / ROUNDS;

    println!("sequential: {:?}", sequential);
    println!("parallel:   {:?}", parallel);
    println!(
        "speedup:    {:.2}",
        sequential.as_secs_f64() / parallel.as_secs_f64()
    );

    let boolean_function = pseudo_random_function(ANALYSIS_VARIABLES);
    let timed_analysis = analyze_timed(&boolean_function, &AnalysisOptions::default());
    println!("\nanalysis, n = {}", ANALYSIS_VARIABLES);
    for (step, duration) in &timed_analysis.steps {
        println!("{:>28}: {:?}", step, duration);
    }
    println!("{:>28}: {:?}", "total", timed_analysis.total);
    println!(
        "nonlinearity {}, algebraic immunity {:?}",
        timed_analysis.analysis.nonlinearity, timed_analysis.analysis.algebraic_immunity
    );
}
