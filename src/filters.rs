use askama::Error;

pub fn checked(value: &bool) -> Result<String, Error> {
    Ok(if *value { s!("checked") } else { String::new() })
}

pub fn selected_if(value: &str, current: &str) -> Result<String, Error> {
    Ok(if value == current {
        s!("selected")
    } else {
        String::new()
    })
}
