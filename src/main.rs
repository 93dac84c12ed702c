use anyhow::{anyhow, bail, Context, Result};
use linkedlist::LinkedList;
use regex::Regex;
use std::{env, fs::File, io::Read, process};

mod linkedlist;

/*
 * One command per script line : a word followed by up to two signed
 * integer arguments. Blank lines and '#' comments are skipped.
 */
const COMMAND: &str = r"^(\w+)(?:\s+(-?\d+))?(?:\s+(-?\d+))?$";

/*
 * Positions arrive as signed integers from the script ; a negative
 * one is a range violation before it ever reaches the list.
 */
fn position(raw: i64) -> Result<usize> {
    if raw < 0 {
        bail!("position {} out of bounds : positions cannot be negative", raw);
    }
    Ok(raw as usize)
}

/*
 * Apply one script line to the list. Returns the text to print for
 * commands that produce output, None for the rest.
 *
 * Commands :
 *   pushf <v>     prepend value
 *   pushb <v>     append value
 *   ins <v> <p>   insert value at position
 *   get <p>       print value at position
 *   find <v>      print first index of value, -1 when absent
 *   rmval <v>     remove first node with value
 *   rmat <p>      remove at position, print removed value
 *   print         print the whole list
 *   len           print the length
 */
fn run_line(list: &mut LinkedList<i64>, re: &Regex, line: &str) -> Result<Option<String>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let captures = re
        .captures(line)
        .ok_or(anyhow!("Failed to parse command {}", line))?;
    let op = captures.get(1).unwrap().as_str();
    let arg = |i: usize| -> Result<i64> {
        Ok(captures
            .get(i)
            .ok_or(anyhow!("Missing argument for {}", op))?
            .as_str()
            .parse()?)
    };

    Ok(match op {
        "pushf" => {
            list.push_front(arg(2)?);
            None
        }
        "pushb" => {
            list.push_back(arg(2)?);
            None
        }
        "ins" => {
            list.insert(arg(2)?, position(arg(3)?)?)?;
            None
        }
        "get" => Some(list.get(position(arg(2)?)?)?.to_string()),
        "find" => Some(match list.position_of(&arg(2)?) {
            Some(index) => index.to_string(),
            None => "-1".to_string(),
        }),
        "rmval" => {
            list.remove_value(&arg(2)?);
            None
        }
        "rmat" => Some(list.remove_at(position(arg(2)?)?)?.to_string()),
        "print" => Some(list.to_string()),
        "len" => Some(list.len().to_string()),
        _ => bail!("Unknown command {}", op),
    })
}

fn main() -> Result<()> {
    if env::args().len() != 2 {
        println!(
            "Usage : {} [script file]",
            env::args().next().unwrap()
        );
        process::exit(1);
    }

    let path = env::args().nth(1).unwrap();
    let mut f = File::open(path).context("Failed to open script")?;
    let mut input = String::new();
    f.read_to_string(&mut input)
        .context("Failed to read script")?;

    let re = Regex::new(COMMAND)?;
    let mut list = LinkedList::new();
    for (lineno, line) in input.lines().enumerate() {
        let out = run_line(&mut list, &re, line)
            .with_context(|| format!("Failed on line {}", lineno + 1))?;
        if let Some(out) = out {
            println!("{}", out);
        }
    }

    Ok(())
}
