use anyhow::Result;

fn main() -> Result<()> {
    dog_training_assistant::cli::run()
}
