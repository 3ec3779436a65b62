use recommendations_review::app::App;

fn main() {
    leptos::mount::mount_to_body(App);
}
