#![allow(non_snake_case)]

use devla::client;

fn main() {
    dioxus::launch(client::App);
}
