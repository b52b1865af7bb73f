//! Long-form write-ups shown on the detail screen.

/// What: Look up the long-form description for an item id.
///
/// Inputs:
/// - `item_id`: Catalog identifier
///
/// Output:
/// - `Some(text)` for catalog items that have a write-up, `None` otherwise.
pub fn long_description(item_id: &str) -> Option<&'static str> {
    let text = match item_id {
        "1" => {
            "Coroutines let Android code suspend instead of block.\n\
             • Suspend functions read sequentially while running asynchronously\n\
             • Structured concurrency cancels children when their scope ends\n\
             • Jetpack libraries expose coroutine-friendly APIs out of the box"
        }
        "2" => {
            "Flow models values that arrive over time as a cold stream.\n\
             • Nothing runs until a collector subscribes\n\
             • Operators such as debounce, filter, and flatMapLatest shape the stream\n\
             • StateFlow holds the latest value for UI observers"
        }
        "3" => {
            "Compose describes UI as a function of state.\n\
             • Hoisted state keeps composables stateless and reusable\n\
             • Recomposition updates only the parts whose inputs changed\n\
             • Previews make iteration quick"
        }
        "4" => {
            "The Navigation component centralizes how screens connect.\n\
             • Destinations and arguments are declared in one graph\n\
             • Deep links resolve to destinations directly\n\
             • Back stack handling comes for free"
        }
        "5" => {
            "MVVM keeps screens thin by moving state into view models.\n\
             • The view model owns an immutable state snapshot\n\
             • The UI renders the snapshot and sends intents back\n\
             • Business rules stay testable without a device"
        }
        "6" => {
            "Gradle modules draw hard lines between features.\n\
             • Each module declares exactly what it depends on\n\
             • Unchanged modules are skipped by incremental builds\n\
             • Features can be tested in isolation"
        }
        "7" => {
            "Hilt wires dependencies at compile time.\n\
             • Missing bindings fail the build, not the app\n\
             • Components follow Android lifecycles\n\
             • Test doubles swap in through dedicated modules"
        }
        "8" => {
            "Interface-oriented design describes capabilities, not hierarchies.\n\
             • Small interfaces with default methods compose well\n\
             • Implementations can be replaced by fakes in tests\n\
             • Callers depend on behavior instead of concrete types"
        }
        "9" => {
            "Feature toggles decouple deploying code from releasing features.\n\
             • Flags can be flipped at runtime without a new build\n\
             • Gradual rollouts limit the blast radius of a change\n\
             • A kill switch disables a misbehaving feature instantly"
        }
        "10" => {
            "Timber wraps platform logging behind planted trees.\n\
             • Tags are derived automatically from the calling class\n\
             • Debug builds log verbosely while release builds stay quiet\n\
             • Custom trees forward logs to crash reporting"
        }
        "11" => {
            "Kotlin 2.0 ships the K2 compiler.\n\
             • Compilation is markedly faster on large projects\n\
             • Smarter type inference removes many explicit casts\n\
             • IDE analysis shares the same frontend"
        }
        "12" => {
            "JUnit 5 modernizes JVM testing.\n\
             • Parameterized tests cover many inputs with one body\n\
             • Nested classes group related cases\n\
             • Extensions replace the old runner model"
        }
        "13" => {
            "Screenshot tests guard the look of the UI.\n\
             • Components render off-device into images\n\
             • Images are diffed against approved references\n\
             • CI flags unintended visual changes"
        }
        "14" => {
            "Accessible apps work for everyone.\n\
             • Content descriptions give screen readers something to say\n\
             • Semantic properties describe roles and states\n\
             • Touch targets and contrast follow platform guidance"
        }
        _ => return None,
    };
    Some(text)
}
