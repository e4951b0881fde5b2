fn main() {
    kidslink_frontend::start();
}
