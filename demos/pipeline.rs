//! Record-processing pipeline built from arrows.
//!
//! Each record carries an id that must survive untouched while its payload
//! goes through parse -> validate -> score.

use arrows::make;

enum Score {
    Rejected(&'static str),
    Accepted(u32),
}

fn main() {
    let parse = make(|raw: &str| raw.trim().parse::<i64>().ok());
    let validate = make(|n: Option<i64>| match n {
        Some(v) if (0..=1000).contains(&v) => Ok(v as u32),
        Some(_) => Err("out of range"),
        None => Err("not a number"),
    });
    let score = make(|checked: Result<u32, &'static str>| match checked {
        Ok(v) => Score::Accepted(v * 3),
        Err(reason) => Score::Rejected(reason),
    });

    // (id, raw) -> (id, score)
    let pipeline = (parse >> validate >> score).second::<u32>();

    let records = [(1, " 12 "), (2, "abc"), (3, "5000"), (4, "333")];
    for record in records {
        match pipeline.apply(record) {
            (id, Score::Accepted(points)) => println!("record {id}: accepted, {points} points"),
            (id, Score::Rejected(reason)) => println!("record {id}: rejected, {reason}"),
        }
    }
}
