use std::path::{Path, PathBuf};

use clap::Args;
use dialoguer::{Input, Password, Select};
use pixelveil_core::{commands, VeilError};

use crate::CliResult;

/// Starts an interactive session: pick an image, then conceal or reveal
#[derive(Args, Debug)]
pub struct SessionArgs {}

/// State the screens share. Passed by reference, never global.
#[derive(Default)]
struct Session {
    image: Option<PathBuf>,
    password: String,
}

/// The screens a session moves between.
enum Screen {
    Selection,
    Conceal,
    Reveal,
    Done,
}

impl SessionArgs {
    pub fn run(self) -> CliResult<()> {
        let mut session = Session::default();
        let mut screen = Screen::Selection;

        loop {
            screen = match screen {
                Screen::Selection => selection_screen(&mut session)?,
                Screen::Conceal => conceal_screen(&mut session)?,
                Screen::Reveal => reveal_screen(&session)?,
                Screen::Done => return Ok(()),
            };
        }
    }
}

fn selection_screen(session: &mut Session) -> CliResult<Screen> {
    let path: String = Input::new()
        .with_prompt("Image file")
        .interact_text()
        .map_err(prompt_error)?;
    session.image = Some(PathBuf::from(path));

    let choice = Select::new()
        .with_prompt("What would you like to do")
        .items(&["Conceal a message", "Reveal a message", "Quit"])
        .default(0)
        .interact()
        .map_err(prompt_error)?;

    Ok(match choice {
        0 => Screen::Conceal,
        1 => Screen::Reveal,
        _ => Screen::Done,
    })
}

fn conceal_screen(session: &mut Session) -> CliResult<Screen> {
    let Some(image) = session.image.clone() else {
        return Ok(Screen::Selection);
    };

    let message: String = Input::new()
        .with_prompt("Secret message")
        .interact_text()
        .map_err(prompt_error)?;
    let password: String = Password::new()
        .with_prompt("Password")
        .interact()
        .map_err(prompt_error)?;
    let target: String = Input::new()
        .with_prompt("Save as")
        .default("concealed_image.png".into())
        .interact_text()
        .map_err(prompt_error)?;

    session.password = password;

    match commands::conceal(&image, Path::new(&target), &message) {
        Ok(()) => println!("Message concealed into {target}"),
        Err(e) => eprintln!("Error: {e}"),
    }

    Ok(Screen::Selection)
}

fn reveal_screen(session: &Session) -> CliResult<Screen> {
    let Some(image) = session.image.as_deref() else {
        return Ok(Screen::Selection);
    };

    let entered: String = Password::new()
        .with_prompt("Password")
        .interact()
        .map_err(prompt_error)?;

    // The password never touches the encoding, it only gates this screen.
    if entered != session.password {
        eprintln!("Error: incorrect password");
        return Ok(Screen::Selection);
    }

    match commands::reveal(image) {
        Ok(message) => println!("Hidden message: {message}"),
        Err(e) => eprintln!("Error: {e}"),
    }

    Ok(Screen::Selection)
}

fn prompt_error(e: dialoguer::Error) -> VeilError {
    VeilError::IoError(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))
}
