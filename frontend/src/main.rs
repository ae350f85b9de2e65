fn main() {
    remainder_frontend::run();
}
