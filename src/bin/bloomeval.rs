// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Evaluation harness: streams an input file into a filter and classifies
//! each query against its ground-truth count.

use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};

use multibloom::a2::A2Filter;
use multibloom::basic::BasicFilter;
use multibloom::bitwise::BitwiseFilter;
use multibloom::counting::CountingFilter;
use multibloom::hash::make_hasher;
use multibloom::object::Wrap;
use multibloom::spectral::{SpectralMiFilter, SpectralRmFilter};
use multibloom::stable::StableFilter;

#[derive(Parser)]
#[command(
    name = "bloomeval",
    about = "Evaluate a Bloom filter variant against a ground-truth query stream"
)]
struct Args {
    /// Bloom filter variant
    #[arg(long, value_enum)]
    r#type: FilterType,

    /// File with one item per line (empty lines skipped)
    #[arg(long)]
    input: PathBuf,

    /// File with `<ground_truth_count> <item>` lines (`uniq -c` format)
    #[arg(long)]
    query: PathBuf,

    /// Parse items as numbers instead of strings
    #[arg(long)]
    numeric: bool,

    /// Number of cells in the primary filter
    #[arg(long, default_value_t = 8192)]
    cells: usize,

    /// Bits per cell in the primary filter
    #[arg(long, default_value_t = 1)]
    width: usize,

    /// Number of hash functions in the primary filter
    #[arg(long, default_value_t = 3)]
    hash_functions: usize,

    /// Seed for the primary filter
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Use double hashing in the primary filter
    #[arg(long)]
    double_hashing: bool,

    /// Partition the cells among the hash functions
    #[arg(long)]
    partition: bool,

    /// Desired false-positive rate (basic: selects the parametric
    /// constructor together with --capacity)
    #[arg(long, default_value_t = 0.0)]
    fp_rate: f64,

    /// Expected number of items (basic parametric constructor) or
    /// per-generation capacity (a2)
    #[arg(long, default_value_t = 0)]
    capacity: usize,

    /// Cells decremented per addition (stable)
    #[arg(long, default_value_t = 2)]
    evict: usize,

    /// Number of cells in the secondary filter (spectral-rm)
    #[arg(long, default_value_t = 1024)]
    cells2: usize,

    /// Bits per cell in the secondary filter (spectral-rm)
    #[arg(long, default_value_t = 1)]
    width2: usize,

    /// Number of hash functions in the secondary filter (spectral-rm)
    #[arg(long, default_value_t = 3)]
    hash_functions2: usize,

    /// Seed for the secondary filter (spectral-rm, a2)
    #[arg(long, default_value_t = 1)]
    seed2: u64,

    /// Use double hashing in the secondary filter (spectral-rm)
    #[arg(long)]
    double_hashing2: bool,
}

#[derive(ValueEnum, Clone, Copy)]
enum FilterType {
    Basic,
    Counting,
    SpectralMi,
    SpectralRm,
    Bitwise,
    A2,
    Stable,
}

enum Filter {
    Basic(BasicFilter),
    Counting(CountingFilter),
    SpectralMi(SpectralMiFilter),
    SpectralRm(SpectralRmFilter),
    Bitwise(BitwiseFilter),
    A2(A2Filter),
    Stable(StableFilter),
}

impl Filter {
    fn add<T: Wrap>(&mut self, item: T) {
        match self {
            Filter::Basic(filter) => filter.add(item),
            Filter::Counting(filter) => filter.add(item),
            Filter::SpectralMi(filter) => filter.add(item),
            Filter::SpectralRm(filter) => filter.add(item),
            Filter::Bitwise(filter) => filter.add(item),
            Filter::A2(filter) => filter.add(item),
            Filter::Stable(filter) => filter.add(item),
        }
    }

    fn lookup<T: Wrap>(&self, item: T) -> u64 {
        match self {
            Filter::Basic(filter) => filter.lookup(item),
            Filter::Counting(filter) => filter.lookup(item),
            Filter::SpectralMi(filter) => filter.lookup(item),
            Filter::SpectralRm(filter) => filter.lookup(item),
            Filter::Bitwise(filter) => filter.lookup(item),
            Filter::A2(filter) => filter.lookup(item),
            Filter::Stable(filter) => filter.lookup(item),
        }
    }
}

fn build_filter(args: &Args) -> Result<Filter> {
    let filter = match args.r#type {
        FilterType::Basic => {
            if args.fp_rate > 0.0 && args.capacity > 0 {
                Filter::Basic(BasicFilter::with_rate(
                    args.fp_rate,
                    args.capacity,
                    args.seed,
                    args.double_hashing,
                    args.partition,
                )?)
            } else {
                let hasher = make_hasher(args.hash_functions, args.seed, args.double_hashing)?;
                Filter::Basic(BasicFilter::new(hasher, args.cells, args.partition)?)
            }
        }
        FilterType::Counting => {
            let hasher = make_hasher(args.hash_functions, args.seed, args.double_hashing)?;
            Filter::Counting(CountingFilter::new(
                hasher,
                args.cells,
                args.width,
                args.partition,
            )?)
        }
        FilterType::SpectralMi => {
            let hasher = make_hasher(args.hash_functions, args.seed, args.double_hashing)?;
            Filter::SpectralMi(SpectralMiFilter::new(
                hasher,
                args.cells,
                args.width,
                args.partition,
            )?)
        }
        FilterType::SpectralRm => {
            let hasher1 = make_hasher(args.hash_functions, args.seed, args.double_hashing)?;
            let hasher2 = make_hasher(args.hash_functions2, args.seed2, args.double_hashing2)?;
            Filter::SpectralRm(SpectralRmFilter::new(
                hasher1,
                args.cells,
                args.width,
                hasher2,
                args.cells2,
                args.width2,
                args.partition,
            )?)
        }
        FilterType::Bitwise => Filter::Bitwise(BitwiseFilter::new(
            args.hash_functions,
            args.cells,
            args.seed,
        )?),
        FilterType::A2 => Filter::A2(A2Filter::new(
            args.hash_functions,
            args.cells,
            args.capacity,
            args.seed,
            args.seed2,
        )?),
        FilterType::Stable => {
            let hasher = make_hasher(args.hash_functions, args.seed, args.double_hashing)?;
            Filter::Stable(StableFilter::new(
                hasher,
                args.cells,
                args.width,
                args.evict,
                args.seed,
            )?)
        }
    };
    Ok(filter)
}

fn run(args: &Args) -> Result<()> {
    let mut filter = build_filter(args)?;

    let input = File::open(&args.input)
        .with_context(|| format!("cannot read {}", args.input.display()))?;
    for line in BufReader::new(input).lines() {
        let line = line.context("failed to read input line")?;
        if line.is_empty() {
            continue;
        }
        if line.contains(char::is_whitespace) {
            bail!("whitespace in input not supported: {line:?}");
        }
        if args.numeric {
            let value: f64 = line
                .parse()
                .with_context(|| format!("cannot parse {line:?} as a number"))?;
            filter.add(value);
        } else {
            filter.add(line.as_str());
        }
    }

    let query = File::open(&args.query)
        .with_context(|| format!("cannot read {}", args.query.display()))?;
    let mut tn = 0u64;
    let mut tp = 0u64;
    let mut fp = 0u64;
    let mut fneg = 0u64;

    println!("TN TP FP FN G C E");
    for line in BufReader::new(query).lines() {
        let line = line.context("failed to read query line")?;
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split_whitespace();
        let truth: u64 = fields
            .next()
            .context("missing ground-truth count")?
            .parse()
            .with_context(|| format!("cannot parse ground-truth count in {line:?}"))?;
        let element = fields.next().context("missing element")?;
        if fields.next().is_some() {
            bail!("trailing data in query line: {line:?}");
        }

        let count = if args.numeric {
            let value: f64 = element
                .parse()
                .with_context(|| format!("cannot parse {element:?} as a number"))?;
            filter.lookup(value)
        } else {
            filter.lookup(element)
        };

        if count == 0 && truth == 0 {
            tn += 1;
        } else if count == truth {
            tp += 1;
        } else if count > truth {
            fp += 1;
        } else {
            fneg += 1;
        }
        println!("{tn} {tp} {fp} {fneg} {truth} {count} {element}");
    }

    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("bloomeval: {err:#}");
        std::process::exit(1);
    }
}
