use crate::bench_utils::GraphShape;

pub const DEFAULT_SEED: u64 = 0x5EED;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandLineConfig {
    pub vertices: usize,
    pub edges: usize,
    pub queries: usize,
    pub seed: u64,
    /// Seed for query endpoints. Defaults to `seed + 1` so queries never replay the edge stream.
    pub query_seed: u64,
    pub label: String,
    pub shape: GraphShape,
    pub command: String,
}

impl Default for CommandLineConfig {
    fn default() -> Self {
        Self {
            vertices: 100_000,
            edges: 500_000,
            queries: 100,
            seed: DEFAULT_SEED,
            query_seed: DEFAULT_SEED.wrapping_add(1),
            label: String::from("A"),
            shape: GraphShape::Random { edges: 500_000 },
            command: String::from("stats"),
        }
    }
}

impl CommandLineConfig {
    pub fn from_args(args: &[&str]) -> Result<Self, String> {
        let mut config = Self::default();
        let mut shape = String::from("random");
        let mut query_seed = None;
        let mut iter = args.iter().skip(1);
        while let Some(arg) = iter.next() {
            match *arg {
                "--vertices" | "-n" => {
                    config.vertices = parse_number(iter.next(), "--vertices")?;
                }
                "--edges" | "-m" => {
                    config.edges = parse_number(iter.next(), "--edges")?;
                }
                "--queries" | "-q" => {
                    config.queries = parse_number(iter.next(), "--queries")?;
                }
                "--seed" => {
                    config.seed = parse_number(iter.next(), "--seed")?;
                }
                "--query-seed" => {
                    query_seed = Some(parse_number(iter.next(), "--query-seed")?);
                }
                "--label" => {
                    config.label = iter
                        .next()
                        .ok_or_else(|| "--label requires a value".to_string())?
                        .to_string();
                }
                "--shape" => {
                    shape = iter
                        .next()
                        .ok_or_else(|| "--shape requires a value".to_string())?
                        .to_string();
                }
                other if other.starts_with('-') => {
                    return Err(format!("unknown flag {other}"));
                }
                _ => {
                    config.command = arg.to_string();
                }
            }
        }
        if config.vertices < 2 {
            return Err("--vertices must be at least 2".to_string());
        }
        config.shape = GraphShape::parse(&shape, config.edges)?;
        config.query_seed = query_seed.unwrap_or_else(|| config.seed.wrapping_add(1));
        Ok(config)
    }

    pub fn help() -> &'static str {
        "Usage: memgraph [stats|query] [--vertices N] [--edges M] [--queries Q] [--seed S] [--query-seed S] [--label NAME] [--shape random|line|cycle]\n"
    }
}

fn parse_number<T: std::str::FromStr>(value: Option<&&str>, flag: &str) -> Result<T, String> {
    let raw = value.ok_or_else(|| format!("{flag} requires a value"))?;
    raw.parse()
        .map_err(|_| format!("{flag} expects a number, got {raw}"))
}
