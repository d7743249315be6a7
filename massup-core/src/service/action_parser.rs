use crate::model::Action;

/// Recognizes an action directive line. The text after the first space,
/// trimmed, becomes the action's raw parameters; resolution happens later,
/// at execution time.
pub fn from_directive(line: &str) -> Option<Action> {
    if let Some(rest) = line.strip_prefix("print ") {
        return Some(Action::Print(rest.trim().to_owned()));
    }
    if let Some(rest) = line.strip_prefix("save ") {
        return Some(Action::Save(rest.trim().to_owned()));
    }
    if let Some(rest) = line.strip_prefix("mkdir ") {
        return Some(Action::Mkdir(rest.trim().to_owned()));
    }
    None
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_print_directive() {
        assert_eq!(
            Some(Action::Print("Hello <%name%>".to_owned())),
            from_directive("print Hello <%name%>")
        );
    }

    #[test]
    fn test_save_directive_keeps_raw_parameters() {
        assert_eq!(
            Some(Action::Save("<%body%> to out/<%name%>.txt".to_owned())),
            from_directive("save <%body%> to out/<%name%>.txt")
        );
    }

    #[test]
    fn test_mkdir_directive() {
        assert_eq!(
            Some(Action::Mkdir("some/dir".to_owned())),
            from_directive("mkdir some/dir")
        );
    }

    #[test]
    fn test_parameters_are_trimmed() {
        assert_eq!(
            Some(Action::Print("x".to_owned())),
            from_directive("print  x ")
        );
    }

    #[test]
    fn test_keyword_without_space_is_not_a_directive() {
        assert_eq!(None, from_directive("print"));
        assert_eq!(None, from_directive("printx y"));
    }

    #[test]
    fn test_plain_field_line_is_not_a_directive() {
        assert_eq!(None, from_directive("name = World"));
    }
}
