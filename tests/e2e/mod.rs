// End-to-end tests for the VoiceForge Backend API
//
// Each test wires the real application router against an in-process mock
// of the ElevenLabs API listening on an ephemeral port.
//
// Architecture:
// - One application instance, record store, and mock per test
// - The app is configured with the mock's base URL, so requests to
//   POST /api/generate-voice exercise the full proxy path
// - The mock counts and captures provider calls for assertions
//
// Tests run in parallel by default; nothing is shared between them.

mod helpers;
