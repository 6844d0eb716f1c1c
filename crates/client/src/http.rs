use crate::{
  error::{ClientError, ClientResult},
  vote::VoteMutation,
};
use clubhouse_api_common::{
  club::{
    ClubResponse,
    CreateClub,
    GetClub,
    GetSubscribed,
    ListClubsResponse,
    SearchClubs,
    SearchClubsResponse,
    SubscribeToClub,
    SubscriptionResponse,
  },
  comment::{CommentResponse, CreateComment, CreateCommentVote, GetComments, GetCommentsResponse},
  person::{GetPersonDetails, GetPersonDetailsResponse},
  post::{CreatePost, CreatePostVote, GetPost, GetPosts, GetPostsResponse, PostResponse},
  vote::VoteResponse,
};
use clubhouse_db_schema::{newtypes::VoteTarget, source::vote::VoteType};
use clubhouse_utils::error::ClubhouseErrorType;
use reqwest::{Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;
use url::Url;

static AUTH_HEADER_NAME: &str = "auth";

/// Typed calls for every route under `/api/v3`.
#[derive(Clone, Debug)]
pub struct ClubhouseClient {
  client: Client,
  base_url: Url,
  jwt: Option<String>,
}

impl ClubhouseClient {
  /// `base_url` is the address of the server, eg `https://clubs.example.com`. A path like
  /// `https://example.com/forum` is kept, the api lives below it.
  pub fn new(base_url: &str) -> ClientResult<Self> {
    Self::with_client(Client::new(), base_url)
  }

  pub fn with_client(client: Client, base_url: &str) -> ClientResult<Self> {
    let mut base_url = Url::parse(base_url)?;
    if !base_url.path().ends_with('/') {
      let path = format!("{}/", base_url.path());
      base_url.set_path(&path);
    }
    let base_url = base_url.join("api/v3/")?;
    Ok(ClubhouseClient {
      client,
      base_url,
      jwt: None,
    })
  }

  /// Sends the session token issued by the identity provider with every request.
  pub fn with_jwt(mut self, jwt: String) -> Self {
    self.jwt = Some(jwt);
    self
  }

  pub fn base_url(&self) -> &Url {
    &self.base_url
  }

  fn endpoint(&self, path: &str) -> ClientResult<Url> {
    Ok(self.base_url.join(path)?)
  }

  fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
    match &self.jwt {
      Some(jwt) => builder.header(AUTH_HEADER_NAME, jwt),
      None => builder,
    }
  }

  async fn get<Q, R>(&self, path: &str, query: &Q) -> ClientResult<R>
  where
    Q: Serialize + ?Sized,
    R: DeserializeOwned,
  {
    let url = self.endpoint(path)?;
    debug!("GET {}", url);
    let builder = self.authorize(self.client.get(url).query(query));
    read_response(builder.send().await?).await
  }

  async fn post<B, R>(&self, path: &str, body: &B) -> ClientResult<R>
  where
    B: Serialize + ?Sized,
    R: DeserializeOwned,
  {
    let url = self.endpoint(path)?;
    debug!("POST {}", url);
    let builder = self.authorize(self.client.post(url).json(body));
    read_response(builder.send().await?).await
  }

  pub async fn create_club(&self, form: &CreateClub) -> ClientResult<ClubResponse> {
    self.post("club", form).await
  }

  pub async fn get_club(&self, form: &GetClub) -> ClientResult<ClubResponse> {
    self.get("club", form).await
  }

  pub async fn list_clubs(&self) -> ClientResult<ListClubsResponse> {
    self.get("club/list", &()).await
  }

  pub async fn search_clubs(&self, form: &SearchClubs) -> ClientResult<SearchClubsResponse> {
    self.get("club/search", form).await
  }

  pub async fn subscribe_to_club(
    &self,
    form: &SubscribeToClub,
  ) -> ClientResult<SubscriptionResponse> {
    self.post("club/subscribe", form).await
  }

  pub async fn get_subscribed(&self, form: &GetSubscribed) -> ClientResult<SubscriptionResponse> {
    self.get("club/subscribed", form).await
  }

  pub async fn create_post(&self, form: &CreatePost) -> ClientResult<PostResponse> {
    self.post("post", form).await
  }

  pub async fn get_post(&self, form: &GetPost) -> ClientResult<PostResponse> {
    self.get("post", form).await
  }

  pub async fn list_posts(&self, form: &GetPosts) -> ClientResult<GetPostsResponse> {
    self.get("post/list", form).await
  }

  pub async fn vote_on_post(&self, form: &CreatePostVote) -> ClientResult<VoteResponse> {
    self.post("post/vote", form).await
  }

  pub async fn create_comment(&self, form: &CreateComment) -> ClientResult<CommentResponse> {
    self.post("comment", form).await
  }

  pub async fn list_comments(&self, form: &GetComments) -> ClientResult<GetCommentsResponse> {
    self.get("comment/list", form).await
  }

  pub async fn vote_on_comment(&self, form: &CreateCommentVote) -> ClientResult<VoteResponse> {
    self.post("comment/vote", form).await
  }

  pub async fn get_person_details(
    &self,
    form: &GetPersonDetails,
  ) -> ClientResult<GetPersonDetailsResponse> {
    self.get("user", form).await
  }
}

impl VoteMutation for ClubhouseClient {
  async fn apply_vote(&self, target: VoteTarget, vote_type: VoteType) -> ClientResult<i64> {
    let res = match target {
      VoteTarget::Post(post_id) => {
        self
          .vote_on_post(&CreatePostVote { post_id, vote_type })
          .await?
      }
      VoteTarget::Comment(comment_id) => {
        self
          .vote_on_comment(&CreateCommentVote {
            comment_id,
            vote_type,
          })
          .await?
      }
    };
    Ok(res.score)
  }
}

async fn read_response<R: DeserializeOwned>(res: Response) -> ClientResult<R> {
  let status = res.status();
  if status.is_success() {
    return Ok(res.json::<R>().await?);
  }
  let text = res.text().await?;
  Err(ClientError::Api(parse_error_body(&text, status)))
}

/// Error bodies look like `{"error": "couldnt_find_post"}`. Anything else, for example from a
/// proxy in front of the server, is kept as an unknown error.
fn parse_error_body(text: &str, status: reqwest::StatusCode) -> ClubhouseErrorType {
  serde_json::from_str(text)
    .unwrap_or_else(|_| ClubhouseErrorType::Unknown(format!("{status}: {text}")))
}
