fn main() -> anyhow::Result<()> {
    pollster::block_on(noobgraphics::run())
}
