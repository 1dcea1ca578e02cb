/// Port for reading the Telegram start parameter from the host environment.
pub trait StartParamSource {
    /// The raw start parameter, if the launch carried one.
    ///
    /// Returns the value as handed over by the host, still percent-encoded
    /// if it arrived that way; decoding belongs to the deep-link parser.
    fn start_param(&self) -> Option<String>;
}
