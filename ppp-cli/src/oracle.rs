//! The interactive [`SourceOracle`](reduction::SourceOracle): prompts an operator on standard
//! input/output to pick a safe source/chain, by index, from the candidate list the driver offers.

use std::io::BufRead;

use reduction::SourceOracle;

/// Reads the operator's choice from stdin, re-prompting on anything that isn't a valid index.
pub(crate) struct StdinOracle {
    file: String,
}

impl StdinOracle {
    pub(crate) fn new(file: String) -> Self {
        Self { file }
    }
}

impl SourceOracle for StdinOracle {
    fn choose(&mut self, candidates: &[String]) -> usize {
        let stdin = std::io::stdin();
        loop {
            println!("{}: which safe source/chain should be realized next?", self.file);
            for (i, candidate) in candidates.iter().enumerate() {
                println!("  [{i}] {candidate}");
            }
            print!("> ");
            crate::flush_stdout();

            let mut line = String::new();
            if stdin.lock().read_line(&mut line).unwrap_or(0) == 0 {
                // EOF on stdin: fall back to the first candidate rather than hang forever.
                return 0;
            }
            match line.trim().parse::<usize>() {
                Ok(choice) if choice < candidates.len() => return choice,
                _ => println!("enter a number between 0 and {}", candidates.len() - 1),
            }
        }
    }
}
