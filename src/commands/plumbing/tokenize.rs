use crate::areas::session::Session;
use crate::artifacts::diff::token::tokenize;

impl Session {
    /// Prints the normalized token stream of one input, one quoted token per line.
    pub fn tokenize(&self, operand: &str) -> anyhow::Result<()> {
        let input = self.workspace().read_input(operand)?;
        let config = self.config();

        let tokens = tokenize(&input.content, config.granularity, config.normalization);
        for (index, token) in tokens.iter().enumerate() {
            writeln!(self.writer(), "{index}\t{token:?}")?;
        }

        Ok(())
    }
}
