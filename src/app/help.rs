use petpals_data::Personality;
use std::fmt::Write;

/// Text printed for the `help` command.
#[must_use]
pub fn help_text() -> String {
    let mut out = String::from(
        "Commands:\n\
         \x20 select <id>   click a pet (select it, deselect it, or make it the target)\n\
         \x20 target <id>   choose the interaction target for the active pet\n\
         \x20 play | feed | pet | music | gift\n\
         \x20               interact with the target\n\
         \x20 swap          swap the two pets' positions\n\
         \x20 new           generate new random pets\n\
         \x20 show          print the pets and history\n\
         \x20 export        print the session as JSON\n\
         \x20 quit          leave\n\
         \n\
         Pet Personalities:\n",
    );
    for personality in Personality::ALL {
        let _ = writeln!(out, "  {:<13} {}", personality, personality.description());
    }
    out
}
