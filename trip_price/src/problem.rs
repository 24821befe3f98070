use std::{fs, io, path::Path, str::FromStr, sync::LazyLock};

use regex::Regex;
use rust_libs::tree_error::TreeError;
use serde::{Deserialize, Serialize};

use crate::trip_path::Trip;

pub const MAX_NODES: usize = 50;
pub const MAX_TRIPS: usize = 100;
pub const MAX_PRICE: i64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Leetcode,
}

impl FromStr for Format {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "leetcode" => Ok(Format::Leetcode),
            other => Err(TreeError::Parse(format!("unknown input format {other:?}"))),
        }
    }
}

/// One "minimize the total price of the trips" instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub n: usize,
    pub edges: Vec<[usize; 2]>,
    #[serde(alias = "prices")]
    pub price: Vec<i64>,
    pub trips: Vec<[usize; 2]>,
}

static N_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bn\s*=\s*(\d+)").unwrap());
static EDGES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bedges\s*=\s*\[((?:[^\[\]]*\[[^\[\]]*\])*[^\[\]]*)\]").unwrap());
static TRIPS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\btrips\s*=\s*\[((?:[^\[\]]*\[[^\[\]]*\])*[^\[\]]*)\]").unwrap());
static PRICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bprices?\s*=\s*\[([^\[\]]*)\]").unwrap());
static PAIR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\s*(\d+)\s*,\s*(\d+)\s*\]").unwrap());

impl Problem {
    /// First worked example of the puzzle, answer 23.
    pub fn example() -> Problem {
        Problem {
            n: 4,
            edges: vec![[0, 1], [1, 2], [1, 3]],
            price: vec![2, 2, 10, 6],
            trips: vec![[0, 3], [2, 1], [2, 3]],
        }
    }

    /// From LeetCode-shaped arguments. Rows must be pairs of non-negative ids.
    pub fn from_rows(
        n: i32,
        edges: &[Vec<i32>],
        price: &[i32],
        trips: &[Vec<i32>],
    ) -> Result<Problem, TreeError> {
        let n = usize::try_from(n)
            .map_err(|_| TreeError::InvalidInput(format!("negative node count {n}")))?;
        Ok(Problem {
            n,
            edges: edges
                .iter()
                .map(|row| to_pair(row, "edge"))
                .collect::<Result<_, _>>()?,
            price: price.iter().map(|&p| p as i64).collect(),
            trips: trips
                .iter()
                .map(|row| to_pair(row, "trip"))
                .collect::<Result<_, _>>()?,
        })
    }

    pub fn edge_pairs(&self) -> Vec<(usize, usize)> {
        self.edges.iter().map(|&[a, b]| (a, b)).collect()
    }

    pub fn trip_pairs(&self) -> Vec<Trip> {
        self.trips.iter().map(|&[a, b]| (a, b)).collect()
    }

    /// Range checks on everything except the tree shape, which
    /// `Tree::from_edges` owns.
    pub fn validate(&self) -> Result<(), TreeError> {
        let n = self.n;
        if !(1..=MAX_NODES).contains(&n) {
            return Err(TreeError::InvalidInput(format!(
                "node count {n} outside 1..={MAX_NODES}"
            )));
        }
        if self.price.len() != n {
            return Err(TreeError::InvalidInput(format!(
                "{} prices for {n} nodes",
                self.price.len()
            )));
        }
        for (v, &p) in self.price.iter().enumerate() {
            if !(1..=MAX_PRICE).contains(&p) || p % 2 != 0 {
                return Err(TreeError::InvalidInput(format!(
                    "price {p} of node {v} is not an even integer in 1..={MAX_PRICE}"
                )));
            }
        }
        if !(1..=MAX_TRIPS).contains(&self.trips.len()) {
            return Err(TreeError::InvalidInput(format!(
                "{} trips, expected 1..={MAX_TRIPS}",
                self.trips.len()
            )));
        }
        if let Some([a, b]) = self.trips.iter().find(|[a, b]| *a >= n || *b >= n) {
            return Err(TreeError::InvalidInput(format!(
                "trip ({a}, {b}) out of range for {n} nodes"
            )));
        }
        Ok(())
    }

    pub fn parse(text: &str, format: Format) -> Result<Problem, TreeError> {
        match format {
            Format::Json => Problem::from_json(text),
            Format::Leetcode => Problem::from_leetcode(text),
        }
    }

    /// `-` reads stdin.
    pub fn load(path: &Path, format: Format) -> Result<Problem, TreeError> {
        let text = if path == Path::new("-") {
            io::read_to_string(io::stdin())?
        } else {
            fs::read_to_string(path)?
        };
        log::debug!("read {} bytes from {}", text.len(), path.display());
        Problem::parse(&text, format)
    }

    pub fn from_json(text: &str) -> Result<Problem, TreeError> {
        serde_json::from_str(text).map_err(|e| TreeError::Parse(e.to_string()))
    }

    /// `n = 4, edges = [[0,1],[1,2]], price = [2,2,10,6], trips = [[0,3]]`,
    /// fields in any order.
    pub fn from_leetcode(text: &str) -> Result<Problem, TreeError> {
        let n = match N_RE.captures(text) {
            Some(c) => c[1]
                .parse()
                .map_err(|_| TreeError::Parse(format!("bad node count {:?}", &c[1])))?,
            None => return TreeError::parse("missing `n = ...`"),
        };
        let edges = match EDGES_RE.captures(text) {
            Some(c) => parse_pairs(&c[1], "edges")?,
            None => return TreeError::parse("missing `edges = [...]`"),
        };
        let price = match PRICE_RE.captures(text) {
            Some(c) => parse_list(&c[1])?,
            None => return TreeError::parse("missing `price = [...]`"),
        };
        let trips = match TRIPS_RE.captures(text) {
            Some(c) => parse_pairs(&c[1], "trips")?,
            None => return TreeError::parse("missing `trips = [...]`"),
        };
        Ok(Problem {
            n,
            edges,
            price,
            trips,
        })
    }
}

fn to_pair(row: &[i32], what: &str) -> Result<[usize; 2], TreeError> {
    match row {
        [a, b] if *a >= 0 && *b >= 0 => Ok([*a as usize, *b as usize]),
        _ => Err(TreeError::InvalidInput(format!(
            "{what} {row:?} is not a pair of node ids"
        ))),
    }
}

fn parse_pairs(inner: &str, field: &str) -> Result<Vec<[usize; 2]>, TreeError> {
    let malformed = || TreeError::Parse(format!("`{field}` must be a list of [a,b] node pairs"));

    let mut pairs = Vec::new();
    let mut last_end = 0;
    for c in PAIR_RE.captures_iter(inner) {
        let whole = c.get(0).ok_or_else(malformed)?;
        let gap = inner[last_end..whole.start()].trim();
        // exactly one comma between pairs, nothing before the first
        let expected = if pairs.is_empty() { "" } else { "," };
        if gap != expected {
            return Err(malformed());
        }
        last_end = whole.end();

        let a = parse_id(&c[1])?;
        let b = parse_id(&c[2])?;
        pairs.push([a, b]);
    }
    if !inner[last_end..].trim().is_empty() {
        return Err(malformed());
    }
    Ok(pairs)
}

fn parse_id(s: &str) -> Result<usize, TreeError> {
    s.parse().map_err(|_| TreeError::Parse(format!("bad id {s:?}")))
}

fn parse_list(inner: &str) -> Result<Vec<i64>, TreeError> {
    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }
    inner
        .split(',')
        .map(str::trim)
        .map(|s| {
            s.parse()
                .map_err(|_| TreeError::Parse(format!("bad integer {s:?}")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leetcode_literal() {
        let p = Problem::from_leetcode(
            "n = 4, edges = [[0,1],[1,2],[1,3]], price = [2,2,10,6], trips = [[0,3],[2,1],[2,3]]",
        )
        .unwrap();
        assert_eq!(p, Problem::example());
    }

    #[test]
    fn leetcode_literal_any_order_and_spacing() {
        let p = Problem::from_leetcode(
            "trips = [ [0, 0] ]\nprice = [ 2 , 2 ]\nedges=[[0,1]]\nn=2",
        )
        .unwrap();
        assert_eq!(p.n, 2);
        assert_eq!(p.edges, vec![[0, 1]]);
        assert_eq!(p.price, vec![2, 2]);
        assert_eq!(p.trips, vec![[0, 0]]);
    }

    #[test]
    fn leetcode_single_node() {
        let p = Problem::from_leetcode("n = 1, edges = [], price = [4], trips = [[0,0]]").unwrap();
        assert!(p.edges.is_empty());
        assert_eq!(p.trips, vec![[0, 0]]);
    }

    #[test]
    fn leetcode_errors() {
        assert!(matches!(
            Problem::from_leetcode("edges = [[0,1]], price = [2,2], trips = [[0,0]]"),
            Err(TreeError::Parse(_))
        ));
        assert!(matches!(
            Problem::from_leetcode("n = 2, edges = [[0,-1]], price = [2,2], trips = [[0,0]]"),
            Err(TreeError::Parse(_))
        ));
        assert!(matches!(
            Problem::from_leetcode("n = 2, edges = [[0,1]], price = [2,x], trips = [[0,0]]"),
            Err(TreeError::Parse(_))
        ));
        assert!(matches!(
            Problem::from_leetcode("n = 2, edges = [[0,1]], price = [2,,2], trips = [[0,0]]"),
            Err(TreeError::Parse(_))
        ));
        assert!(matches!(
            Problem::from_leetcode("n = 2, edges = [[0,1]], price = [2,2,], trips = [[0,0]]"),
            Err(TreeError::Parse(_))
        ));
        assert!(matches!(
            Problem::from_leetcode("n = 3, edges = [[0,1][1,2]], price = [2,2,2], trips = [[0,0]]"),
            Err(TreeError::Parse(_))
        ));
        assert!(matches!(
            Problem::from_leetcode("n = 3, edges = [[0,1],,[1,2]], price = [2,2,2], trips = [[0,0]]"),
            Err(TreeError::Parse(_))
        ));
        assert!(matches!(
            Problem::from_leetcode("n = 2, edges = [,[0,1]], price = [2,2], trips = [[0,0]]"),
            Err(TreeError::Parse(_))
        ));
    }

    #[test]
    fn json_input() {
        let p = Problem::from_json(
            r#"{"n":2,"edges":[[0,1]],"prices":[2,2],"trips":[[0,0]]}"#,
        )
        .unwrap();
        assert_eq!(p.price, vec![2, 2]);
        assert!(matches!(
            Problem::from_json(r#"{"n":2}"#),
            Err(TreeError::Parse(_))
        ));
    }

    #[test]
    fn load_from_file() {
        let dir = std::env::temp_dir().join(format!("trip_price_load_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let text_path = dir.join("example.txt");
        fs::write(
            &text_path,
            "n = 4, edges = [[0,1],[1,2],[1,3]], price = [2,2,10,6], trips = [[0,3],[2,1],[2,3]]\n",
        )
        .unwrap();
        assert_eq!(
            Problem::load(&text_path, Format::Leetcode).unwrap(),
            Problem::example()
        );

        let json_path = dir.join("example.json");
        fs::write(&json_path, serde_json::to_string(&Problem::example()).unwrap()).unwrap();
        assert_eq!(
            Problem::load(&json_path, Format::Json).unwrap(),
            Problem::example()
        );
        // wrong format for the file
        assert!(matches!(
            Problem::load(&json_path, Format::Leetcode),
            Err(TreeError::Parse(_))
        ));

        assert!(matches!(
            Problem::load(&dir.join("missing.txt"), Format::Leetcode),
            Err(TreeError::Io(_))
        ));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn format_names() {
        assert_eq!("json".parse::<Format>().unwrap(), Format::Json);
        assert_eq!("LeetCode".parse::<Format>().unwrap(), Format::Leetcode);
        assert!("xml".parse::<Format>().is_err());
    }

    #[test]
    fn rows_conversion() {
        let p = Problem::from_rows(2, &[vec![0, 1]], &[2, 2], &[vec![0, 0]]).unwrap();
        assert_eq!(p.edge_pairs(), vec![(0, 1)]);
        assert_eq!(p.trip_pairs(), vec![(0, 0)]);
        assert!(Problem::from_rows(-1, &[], &[], &[]).is_err());
        assert!(Problem::from_rows(2, &[vec![0]], &[2, 2], &[vec![0, 0]]).is_err());
        assert!(Problem::from_rows(2, &[vec![0, 1]], &[2, 2], &[vec![0, -3]]).is_err());
    }

    #[test]
    fn validation() {
        assert!(Problem::example().validate().is_ok());

        let mut p = Problem::example();
        p.price[2] = 7;
        assert!(matches!(p.validate(), Err(TreeError::InvalidInput(_))));

        let mut p = Problem::example();
        p.price[2] = 1002;
        assert!(p.validate().is_err());

        let mut p = Problem::example();
        p.trips.clear();
        assert!(p.validate().is_err());

        let mut p = Problem::example();
        p.trips.push([0, 4]);
        assert!(p.validate().is_err());

        let mut p = Problem::example();
        p.price.pop();
        assert!(p.validate().is_err());

        let mut p = Problem::example();
        p.n = 51;
        assert!(p.validate().is_err());
    }
}
