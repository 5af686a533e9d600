use anyhow::Result;

fn main() -> Result<()> {
    deptrack_lib::main()
}
